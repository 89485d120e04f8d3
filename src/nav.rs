//! Navigation targets for sort-toggle interactions.
//!
//! A header column toggles its sort either by following a link whose query
//! parameters encode the new order state (path mode) or by emitting an
//! abstract click event for the host UI to dispatch (event mode). Exactly
//! one mode is configured per table.

use crate::html::Element;
use crate::options::AttrMap;
use crate::order::OrderState;

/// How a sortable header cell navigates, fixed when the table is built.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationMode {
	/// Link-based sorting: headers link to the given path with the toggled
	/// order encoded in the query string.
	Path {
		/// Path target handed to the [`PathBuilder`] collaborator.
		target: String,
		/// Caller-supplied path-scoping options, passed through untouched.
		opts: AttrMap,
	},
	/// Event-based sorting: headers emit a [`ClickEvent`] descriptor.
	Event {
		/// Event name carried by the descriptor.
		name: String,
		/// Optional delivery-scope target for the event.
		target: Option<String>,
	},
}

/// Collaborator turning a path target and an order state into a concrete URL.
///
/// The table renderer hands it the toggled order and does not interpret the
/// result.
pub trait PathBuilder {
	/// Builds a URL for the given target and order state.
	fn build_url(&self, target: &str, order: &OrderState, opts: &AttrMap) -> String;
}

/// Default path builder appending `order_by[]` / `order_directions[]` query
/// pairs to the target path.
///
/// # Example
///
/// ```
/// use sortable_tables::{Direction, OrderState};
/// use sortable_tables::nav::{PathBuilder, QueryPathBuilder};
///
/// let order = OrderState::from_pairs([("name", Direction::Desc)]);
/// let url = QueryPathBuilder.build_url("/users", &order, &Default::default());
/// assert_eq!(url, "/users?order_by[]=name&order_directions[]=desc");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPathBuilder;

impl PathBuilder for QueryPathBuilder {
	fn build_url(&self, target: &str, order: &OrderState, _opts: &AttrMap) -> String {
		let mut pairs: Vec<(&str, String)> = Vec::new();
		if let Some(fields) = &order.order_by {
			for field in fields {
				pairs.push(("order_by[]", urlencoding::encode(field).into_owned()));
			}
		}
		if let Some(directions) = &order.order_directions {
			for direction in directions {
				pairs.push(("order_directions[]", direction.as_str().to_string()));
			}
		}
		if pairs.is_empty() {
			return target.to_string();
		}

		let separator = if target.contains('?') { '&' } else { '?' };
		let query = pairs
			.iter()
			.map(|(key, value)| format!("{key}={value}"))
			.collect::<Vec<_>>()
			.join("&");
		format!("{target}{separator}{query}")
	}
}

/// Abstract UI event descriptor emitted by an event-mode header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
	/// Event name.
	pub name: String,
	/// The field whose sort is toggled.
	pub field: String,
	/// Optional delivery-scope target.
	pub target: Option<String>,
}

impl ClickEvent {
	/// Writes the descriptor onto an element as `data-click`,
	/// `data-click-field` and (when scoped) `data-click-target` attributes.
	pub fn apply(self, element: Element) -> Element {
		let element = element
			.attr("data-click", self.name)
			.attr("data-click-field", self.field);
		match self.target {
			Some(target) => element.attr("data-click-target", target),
			None => element,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::order::Direction;
	use rstest::rstest;

	#[rstest]
	fn test_query_builder_encodes_aligned_lists() {
		let order = OrderState::from_pairs([
			("name", Direction::Asc),
			("age", Direction::DescNullsLast),
		]);
		let url = QueryPathBuilder.build_url("/people", &order, &AttrMap::new());
		assert_eq!(
			url,
			"/people?order_by[]=name&order_by[]=age&order_directions[]=asc&order_directions[]=desc_nulls_last"
		);
	}

	#[rstest]
	fn test_query_builder_unordered_state_leaves_target_alone() {
		let url = QueryPathBuilder.build_url("/people", &OrderState::unordered(), &AttrMap::new());
		assert_eq!(url, "/people");
	}

	#[rstest]
	fn test_query_builder_appends_to_existing_query() {
		let order = OrderState::from_pairs([("name", Direction::Asc)]);
		let url = QueryPathBuilder.build_url("/people?page=2", &order, &AttrMap::new());
		assert_eq!(url, "/people?page=2&order_by[]=name&order_directions[]=asc");
	}

	#[rstest]
	fn test_query_builder_percent_encodes_fields() {
		let order = OrderState::from_pairs([("user name", Direction::Asc)]);
		let url = QueryPathBuilder.build_url("/people", &order, &AttrMap::new());
		assert_eq!(
			url,
			"/people?order_by[]=user%20name&order_directions[]=asc"
		);
	}

	#[rstest]
	fn test_click_event_attrs() {
		let element = ClickEvent {
			name: "sort-table".to_string(),
			field: "name".to_string(),
			target: Some("#table".to_string()),
		}
		.apply(Element::new("span"));
		assert_eq!(
			element.into_node().render_to_string(),
			r##"<span data-click="sort-table" data-click-field="name" data-click-target="#table"></span>"##
		);
	}

	#[rstest]
	fn test_click_event_without_target() {
		let element = ClickEvent {
			name: "sort-table".to_string(),
			field: "name".to_string(),
			target: None,
		}
		.apply(Element::new("span"));
		let html = element.into_node().render_to_string();
		assert!(!html.contains("data-click-target"));
	}
}
