//! Layered render options.
//!
//! A table render combines three option layers: the library defaults, a
//! process-wide override snapshot owned by the hosting application
//! ([`TableConfig`]) and per-call overrides. Layers combine with deep-merge
//! semantics: nested attribute maps merge key-wise, anything else is
//! replaced by the more specific layer.
//!
//! ## Recognized keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `container` | bool — wrap the table in a `<div>` |
//! | `container_attrs` | attribute map for the container |
//! | `no_results_content` | string rendered instead of an empty table |
//! | `symbol_asc` | direction indicator for ascending-family sorts |
//! | `symbol_desc` | direction indicator for descending-family sorts |
//! | `symbol_attrs` | attribute map for the indicator `<span>` |
//! | `table_attrs` | attribute map for `<table>` |
//! | `tbody_td_attrs` | attribute map for body `<td>` |
//! | `tbody_tr_attrs` | attribute map for body `<tr>` |
//! | `th_wrapper_attrs` | attribute map for the header cell `<span>` wrapper |
//! | `thead_th_attrs` | attribute map for header `<th>` |
//! | `thead_tr_attrs` | attribute map for the header `<tr>` |

use serde_json::{Map, Value};

/// A nested attribute map, as carried by the `*_attrs` option keys.
pub type AttrMap = Map<String, Value>;

/// Deep-merges `overlay` into `base`, returning a fresh value.
///
/// Keys present in both layers merge recursively when both values are
/// objects; otherwise the overlay value replaces the base value outright.
/// Keys absent from the overlay are inherited. Neither input is mutated.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			let mut merged = base_map.clone();
			for (key, overlay_value) in overlay_map {
				let value = match merged.get(key) {
					Some(base_value) => deep_merge(base_value, overlay_value),
					None => overlay_value.clone(),
				};
				merged.insert(key.clone(), value);
			}
			Value::Object(merged)
		}
		(_, overlay) => overlay.clone(),
	}
}

/// One layer of rendering options.
///
/// An empty `RenderOptions` inherits everything from the layers below it.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sortable_tables::RenderOptions;
///
/// let opts = RenderOptions::new()
/// 	.set("symbol_asc", "↑")
/// 	.set("table_attrs", json!({"class": "table table-striped"}));
/// assert_eq!(opts.get_str("symbol_asc"), Some("↑"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions(AttrMap);

impl RenderOptions {
	/// Creates an empty option layer.
	pub fn new() -> Self {
		Self(AttrMap::new())
	}

	/// Returns the library defaults: no container, `▴`/`▾` direction
	/// symbols, "No results." placeholder, all attribute groups empty.
	pub fn defaults() -> Self {
		Self::new()
			.set("container", false)
			.set("no_results_content", "No results.")
			.set("symbol_asc", "▴")
			.set("symbol_desc", "▾")
	}

	/// Sets an option key, replacing any existing value.
	pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Returns the raw value for a key, if set.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns a string-valued option.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	/// Returns a bool-valued option, defaulting to false.
	pub fn get_bool(&self, key: &str) -> bool {
		self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
	}

	/// Returns an attribute-map option, defaulting to the empty map.
	pub fn get_attrs(&self, key: &str) -> AttrMap {
		self.0
			.get(key)
			.and_then(Value::as_object)
			.cloned()
			.unwrap_or_default()
	}

	/// Deep-merges `overlay` on top of this layer, returning a fresh layer.
	pub fn merged_with(&self, overlay: &RenderOptions) -> RenderOptions {
		match deep_merge(
			&Value::Object(self.0.clone()),
			&Value::Object(overlay.0.clone()),
		) {
			Value::Object(map) => RenderOptions(map),
			// merging two objects always yields an object
			_ => unreachable!(),
		}
	}
}

impl From<AttrMap> for RenderOptions {
	fn from(map: AttrMap) -> Self {
		Self(map)
	}
}

/// The process-wide option layer, held as an explicit immutable snapshot.
///
/// The hosting application builds one `TableConfig` (usually at startup) and
/// passes it to every render. Concurrent renders share it read-only; swapping
/// configuration at runtime means building a new snapshot.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sortable_tables::{RenderOptions, TableConfig};
///
/// let config = TableConfig::with_overrides(
/// 	RenderOptions::new().set("table_attrs", json!({"class": "app-table"})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
	global: RenderOptions,
}

impl TableConfig {
	/// Creates a config with no global overrides.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a config carrying application-wide overrides.
	pub fn with_overrides(global: RenderOptions) -> Self {
		Self { global }
	}

	/// Merges defaults → global overrides → call overrides into the
	/// effective options for one render.
	pub fn merged(&self, call: &RenderOptions) -> RenderOptions {
		RenderOptions::defaults()
			.merged_with(&self.global)
			.merged_with(call)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_defaults_provide_symbols_and_placeholder() {
		let defaults = RenderOptions::defaults();
		assert_eq!(defaults.get_str("symbol_asc"), Some("▴"));
		assert_eq!(defaults.get_str("symbol_desc"), Some("▾"));
		assert_eq!(defaults.get_str("no_results_content"), Some("No results."));
		assert!(!defaults.get_bool("container"));
	}

	#[rstest]
	fn test_most_specific_layer_wins_per_leaf() {
		let global = RenderOptions::new()
			.set("symbol_asc", "↑")
			.set("table_attrs", json!({"class": "global", "id": "t"}));
		let call = RenderOptions::new().set("table_attrs", json!({"class": "call"}));

		let merged = TableConfig::with_overrides(global).merged(&call);

		// call layer wins the leaf it defines
		let table_attrs = merged.get_attrs("table_attrs");
		assert_eq!(table_attrs.get("class"), Some(&json!("call")));
		// sibling leaves from the global layer survive the nested merge
		assert_eq!(table_attrs.get("id"), Some(&json!("t")));
		// global layer wins over defaults where the call layer is silent
		assert_eq!(merged.get_str("symbol_asc"), Some("↑"));
		// untouched keys keep the default
		assert_eq!(merged.get_str("symbol_desc"), Some("▾"));
	}

	#[rstest]
	fn test_scalar_replaces_map_outright() {
		let base = json!({"a": {"x": 1}});
		let overlay = json!({"a": "flat"});
		assert_eq!(deep_merge(&base, &overlay), json!({"a": "flat"}));
	}

	#[rstest]
	fn test_merge_does_not_mutate_inputs() {
		let base = RenderOptions::new().set("table_attrs", json!({"class": "base"}));
		let overlay = RenderOptions::new().set("table_attrs", json!({"class": "over"}));
		let before = base.clone();

		let _ = base.merged_with(&overlay);

		assert_eq!(base, before);
	}

	#[rstest]
	fn test_all_layers_may_be_empty() {
		let merged = TableConfig::new().merged(&RenderOptions::new());
		assert_eq!(merged, RenderOptions::defaults());
	}

	proptest! {
		/// For every leaf key, the merged result holds the value from the
		/// most specific layer that defines it.
		#[rstest]
		fn prop_layer_precedence_per_leaf(
			keys in prop::collection::vec("[a-z]{1,8}", 1..6),
			global_mask in prop::collection::vec(any::<bool>(), 6),
			call_mask in prop::collection::vec(any::<bool>(), 6),
		) {
			let mut global = RenderOptions::new();
			let mut call = RenderOptions::new();
			for (i, key) in keys.iter().enumerate() {
				if global_mask[i % global_mask.len()] {
					global = global.set(key.clone(), format!("global-{key}"));
				}
				if call_mask[i % call_mask.len()] {
					call = call.set(key.clone(), format!("call-{key}"));
				}
			}

			let merged = TableConfig::with_overrides(global.clone()).merged(&call);

			for key in &keys {
				let expected = call
					.get(key)
					.or_else(|| global.get(key))
					.cloned();
				if let Some(expected) = expected {
					prop_assert_eq!(merged.get(key), Some(&expected));
				}
			}
			// untouched defaults are always retained
			prop_assert!(merged.get("symbol_desc").is_some());
		}
	}
}
