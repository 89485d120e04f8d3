//! Table definition and rendering.
//!
//! A [`Table`] is built once per render from caller-owned parts: the items,
//! the [`TableMeta`] (order state plus sortability capability), a non-empty
//! column list and exactly one navigation mode. Rendering validates those
//! required inputs, merges the option layers and emits the markup tree.
//!
//! ## Example
//!
//! ```
//! use sortable_tables::html::Node;
//! use sortable_tables::{Column, OrderState, Table, TableConfig, TableMeta};
//!
//! struct User {
//! 	name: String,
//! }
//!
//! let users = vec![User { name: "Alice".to_string() }];
//! let html = Table::new()
//! 	.column(
//! 		Column::new("Name")
//! 			.field("name")
//! 			.content(|user: &User| Node::text(user.name.clone())),
//! 	)
//! 	.path("/users")
//! 	.items(users)
//! 	.meta(TableMeta::new(OrderState::unordered()))
//! 	.render_to_string(&TableConfig::new())
//! 	.unwrap();
//! assert!(html.contains("Alice"));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, TableError};
use crate::html::{Element, Node};
use crate::nav::{ClickEvent, NavigationMode, PathBuilder, QueryPathBuilder};
use crate::options::{AttrMap, RenderOptions, TableConfig};
use crate::order::{CyclicToggle, OrderState, OrderToggle, SortSchema, is_sortable};

/// Per-item content template for a column.
pub type ContentTemplate<T> = Box<dyn Fn(&T) -> Node>;

/// Content template for the optional footer row.
pub type FooterTemplate = Box<dyn Fn() -> Node>;

/// One column of the table: an optional sort field, a header label and a
/// per-item content template.
///
/// A column without a field is never sortable. Columns are supplied once per
/// render and are immutable while rendering.
pub struct Column<T> {
	field: Option<String>,
	label: String,
	content: ContentTemplate<T>,
}

impl<T> Column<T> {
	/// Creates a column with the given header label.
	///
	/// The default content template renders nothing; set one with
	/// [`Column::content`].
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			field: None,
			label: label.into(),
			content: Box::new(|_| Node::empty()),
		}
	}

	/// Sets the field identifier this column sorts by.
	pub fn field(mut self, field: impl Into<String>) -> Self {
		self.field = Some(field.into());
		self
	}

	/// Sets the per-item content template.
	pub fn content<F>(mut self, content: F) -> Self
	where
		F: Fn(&T) -> Node + 'static,
	{
		self.content = Box::new(content);
		self
	}

	/// Returns the field identifier, if any.
	pub fn field_name(&self) -> Option<&str> {
		self.field.as_deref()
	}

	/// Returns the header label.
	pub fn label(&self) -> &str {
		&self.label
	}
}

impl<T> std::fmt::Debug for Column<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("field", &self.field)
			.field("label", &self.label)
			.finish_non_exhaustive()
	}
}

/// Pagination/sort metadata driving the header row: the current
/// [`OrderState`] plus the optional capability to query field sortability.
#[derive(Clone)]
pub struct TableMeta {
	order: OrderState,
	schema: Option<Arc<dyn SortSchema>>,
}

impl TableMeta {
	/// Creates meta from an order state, with no schema capability.
	///
	/// Without a schema every field-bearing column is sortable.
	pub fn new(order: OrderState) -> Self {
		Self {
			order,
			schema: None,
		}
	}

	/// Attaches a schema capability restricting which fields are sortable.
	pub fn schema(mut self, schema: Arc<dyn SortSchema>) -> Self {
		self.schema = Some(schema);
		self
	}

	/// Returns the current order state.
	pub fn order(&self) -> &OrderState {
		&self.order
	}
}

impl std::fmt::Debug for TableMeta {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableMeta")
			.field("order", &self.order)
			.field("has_schema", &self.schema.is_some())
			.finish()
	}
}

/// Sortable table builder.
///
/// Required before rendering: at least one column, `items`, `meta` and
/// exactly one of [`Table::path`] / [`Table::event`]. Everything else has a
/// default.
pub struct Table<T> {
	columns: Vec<Column<T>>,
	items: Option<Vec<T>>,
	meta: Option<TableMeta>,
	path: Option<(String, AttrMap)>,
	event: Option<String>,
	event_target: Option<String>,
	footer: Option<FooterTemplate>,
	overrides: RenderOptions,
	toggle: Box<dyn OrderToggle>,
	path_builder: Box<dyn PathBuilder>,
}

impl<T> Default for Table<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Table<T> {
	/// Creates an empty table builder.
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			items: None,
			meta: None,
			path: None,
			event: None,
			event_target: None,
			footer: None,
			overrides: RenderOptions::new(),
			toggle: Box::new(CyclicToggle),
			path_builder: Box::new(QueryPathBuilder),
		}
	}

	/// Adds a column.
	pub fn column(mut self, column: Column<T>) -> Self {
		self.columns.push(column);
		self
	}

	/// Adds multiple columns.
	pub fn columns(mut self, columns: impl IntoIterator<Item = Column<T>>) -> Self {
		self.columns.extend(columns);
		self
	}

	/// Assigns the items to render, one body row each.
	pub fn items(mut self, items: Vec<T>) -> Self {
		self.items = Some(items);
		self
	}

	/// Assigns the pagination/sort metadata.
	pub fn meta(mut self, meta: TableMeta) -> Self {
		self.meta = Some(meta);
		self
	}

	/// Configures link-based sorting against the given path target.
	pub fn path(mut self, target: impl Into<String>) -> Self {
		self.path = Some((target.into(), AttrMap::new()));
		self
	}

	/// Configures link-based sorting with path-scoping options that are
	/// passed through to the [`PathBuilder`] collaborator.
	pub fn path_with_opts(mut self, target: impl Into<String>, opts: AttrMap) -> Self {
		self.path = Some((target.into(), opts));
		self
	}

	/// Configures event-based sorting with the given event name.
	pub fn event(mut self, name: impl Into<String>) -> Self {
		self.event = Some(name.into());
		self
	}

	/// Sets the delivery-scope target for event-based sorting.
	pub fn event_target(mut self, target: impl Into<String>) -> Self {
		self.event_target = Some(target.into());
		self
	}

	/// Sets the footer content template; a `tfoot` row renders when present.
	pub fn footer<F>(mut self, footer: F) -> Self
	where
		F: Fn() -> Node + 'static,
	{
		self.footer = Some(Box::new(footer));
		self
	}

	/// Sets the call-layer option overrides for this render.
	pub fn options(mut self, overrides: RenderOptions) -> Self {
		self.overrides = overrides;
		self
	}

	/// Replaces the order-toggle collaborator (default: [`CyclicToggle`]).
	pub fn order_toggle(mut self, toggle: impl OrderToggle + 'static) -> Self {
		self.toggle = Box::new(toggle);
		self
	}

	/// Replaces the URL-building collaborator (default: [`QueryPathBuilder`]).
	pub fn path_builder(mut self, builder: impl PathBuilder + 'static) -> Self {
		self.path_builder = Box::new(builder);
		self
	}

	/// Renders the table to a markup tree.
	///
	/// # Errors
	///
	/// Returns a [`TableError`] when a required input is missing or the
	/// navigation mode is not configured as exactly one of path/event. No
	/// markup is produced in that case.
	pub fn render(&self, config: &TableConfig) -> Result<Node> {
		let (items, meta, nav) = self.validate()?;
		let opts = config.merged(&self.overrides);

		tracing::debug!(
			columns = self.columns.len(),
			rows = items.len(),
			"rendering table"
		);

		if items.is_empty() {
			let placeholder = opts.get_str("no_results_content").unwrap_or_default();
			return Ok(Node::text(placeholder.to_string()));
		}

		let table = Element::new("table")
			.with_attrs(opts.get_attrs("table_attrs"))
			.child_element(self.render_head(meta, &nav, &opts))
			.child_element(self.render_body(items, &opts));
		let table = match &self.footer {
			Some(footer) => table.child_element(self.render_foot(footer)),
			None => table,
		};

		if opts.get_bool("container") {
			Ok(Element::new("div")
				.with_attrs(opts.get_attrs("container_attrs"))
				.child(table)
				.into_node())
		} else {
			Ok(table.into_node())
		}
	}

	/// Renders the table straight to an HTML string.
	///
	/// # Errors
	///
	/// Same conditions as [`Table::render`].
	pub fn render_to_string(&self, config: &TableConfig) -> Result<String> {
		Ok(self.render(config)?.render_to_string())
	}

	/// Checks the four required inputs and fixes the navigation mode, before
	/// any rendering happens.
	fn validate(&self) -> Result<(&[T], &TableMeta, NavigationMode)> {
		if self.columns.is_empty() {
			return Err(TableError::NoColumns);
		}
		let items = self.items.as_deref().ok_or(TableError::MissingItems)?;
		let meta = self.meta.as_ref().ok_or(TableError::MissingMeta)?;
		let nav = match (&self.path, &self.event) {
			(Some((target, opts)), None) => NavigationMode::Path {
				target: target.clone(),
				opts: opts.clone(),
			},
			(None, Some(name)) => NavigationMode::Event {
				name: name.clone(),
				target: self.event_target.clone(),
			},
			_ => return Err(TableError::InvalidNavigation),
		};
		Ok((items, meta, nav))
	}

	fn render_head(&self, meta: &TableMeta, nav: &NavigationMode, opts: &RenderOptions) -> Element {
		let row = Element::new("tr")
			.with_attrs(opts.get_attrs("thead_tr_attrs"))
			.children(
				self.columns
					.iter()
					.map(|column| self.render_header_cell(column, meta, nav, opts)),
			);
		Element::new("thead").child(row)
	}

	fn render_header_cell(
		&self,
		column: &Column<T>,
		meta: &TableMeta,
		nav: &NavigationMode,
		opts: &RenderOptions,
	) -> Node {
		let th = Element::new("th").with_attrs(opts.get_attrs("thead_th_attrs"));
		let sortable = is_sortable(column.field_name(), meta.schema.as_deref());
		tracing::trace!(label = column.label(), sortable, "header cell");

		let Some(field) = column.field_name().filter(|_| sortable) else {
			// plain cell: label only, no link, no ARIA, no indicator
			return th.child(Node::text(column.label.clone())).into_node();
		};

		let sort = meta.order().resolve(field);
		let th = match sort.aria_sort() {
			Some(aria) => th.attr("aria-sort", aria),
			None => th,
		};

		let control = match nav {
			NavigationMode::Path { target, opts: path_opts } => {
				let toggled = self.toggle.push_order(meta.order(), field);
				let href = self.path_builder.build_url(target, &toggled, path_opts);
				Element::new("a")
					.attr("href", href)
					.child(Node::text(column.label.clone()))
			}
			NavigationMode::Event { name, target } => ClickEvent {
				name: name.clone(),
				field: field.to_string(),
				target: target.clone(),
			}
			.apply(
				Element::new("span")
					.attr("role", "button")
					.attr("tabindex", "0")
					.child(Node::text(column.label.clone())),
			),
		};

		let wrapper = Element::new("span")
			.with_attrs(opts.get_attrs("th_wrapper_attrs"))
			.child(control);
		let wrapper = match sort.direction {
			Some(direction) => {
				let symbol_key = if direction.is_ascending() {
					"symbol_asc"
				} else {
					"symbol_desc"
				};
				let symbol = opts.get_str(symbol_key).unwrap_or_default().to_string();
				wrapper.child(
					Element::new("span")
						.with_attrs(opts.get_attrs("symbol_attrs"))
						.child(Node::text(symbol)),
				)
			}
			None => wrapper,
		};

		th.child(wrapper).into_node()
	}

	fn render_body(&self, items: &[T], opts: &RenderOptions) -> Element {
		let tr_attrs = opts.get_attrs("tbody_tr_attrs");
		let td_attrs = opts.get_attrs("tbody_td_attrs");
		Element::new("tbody").children(items.iter().map(|item| {
			Element::new("tr")
				.with_attrs(tr_attrs.clone())
				.children(self.columns.iter().map(|column| {
					Element::new("td")
						.with_attrs(td_attrs.clone())
						.child((column.content)(item))
				}))
		}))
	}

	fn render_foot(&self, footer: &FooterTemplate) -> Element {
		let cell = Element::new("td")
			.attr("colspan", self.columns.len().to_string())
			.child(footer());
		Element::new("tfoot").child(Element::new("tr").child(cell))
	}
}

impl<T> std::fmt::Debug for Table<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Table")
			.field("columns", &self.columns)
			.field("items", &self.items.as_ref().map(Vec::len))
			.field("meta", &self.meta)
			.field("path", &self.path)
			.field("event", &self.event)
			.finish_non_exhaustive()
	}
}

/// Attribute-map application for elements.
trait WithAttrs: Sized {
	fn with_attrs(self, attrs: AttrMap) -> Self;
	fn child_element(self, child: Element) -> Self;
}

impl WithAttrs for Element {
	/// Applies an attribute map: strings and numbers become attribute
	/// values, bools become boolean attributes, nested values are skipped.
	fn with_attrs(self, attrs: AttrMap) -> Self {
		attrs
			.into_iter()
			.fold(self, |element, (name, value)| match value {
				Value::String(s) => element.attr(name, s),
				Value::Bool(b) => element.bool_attr(name, b),
				Value::Number(n) => element.attr(name, n.to_string()),
				_ => element,
			})
	}

	fn child_element(self, child: Element) -> Self {
		self.child(child.into_node())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Debug, Clone)]
	struct Row {
		name: String,
	}

	fn name_column() -> Column<Row> {
		Column::new("Name")
			.field("name")
			.content(|row: &Row| Node::text(row.name.clone()))
	}

	#[rstest]
	fn test_missing_navigation_mode_rejected() {
		let table = Table::new()
			.column(name_column())
			.items(vec![Row { name: "a".to_string() }])
			.meta(TableMeta::new(OrderState::unordered()));
		assert_eq!(
			table.render(&TableConfig::new()).unwrap_err(),
			TableError::InvalidNavigation
		);
	}

	#[rstest]
	fn test_both_navigation_modes_rejected() {
		let table = Table::new()
			.column(name_column())
			.path("/rows")
			.event("sort")
			.items(vec![Row { name: "a".to_string() }])
			.meta(TableMeta::new(OrderState::unordered()));
		assert_eq!(
			table.render(&TableConfig::new()).unwrap_err(),
			TableError::InvalidNavigation
		);
	}

	#[rstest]
	fn test_no_columns_rejected() {
		let table: Table<Row> = Table::new()
			.path("/rows")
			.items(Vec::new())
			.meta(TableMeta::new(OrderState::unordered()));
		assert_eq!(
			table.render(&TableConfig::new()).unwrap_err(),
			TableError::NoColumns
		);
	}

	#[rstest]
	fn test_empty_items_render_no_results_content() {
		let html = Table::new()
			.column(name_column())
			.path("/rows")
			.items(Vec::new())
			.meta(TableMeta::new(OrderState::unordered()))
			.render_to_string(&TableConfig::new())
			.unwrap();
		assert_eq!(html, "No results.");
	}

	#[rstest]
	fn test_with_attrs_value_kinds() {
		let mut attrs = AttrMap::new();
		attrs.insert("class".to_string(), Value::String("wide".to_string()));
		attrs.insert("colspan".to_string(), Value::Number(2.into()));
		attrs.insert("hidden".to_string(), Value::Bool(false));
		let html = Element::new("td")
			.with_attrs(attrs)
			.into_node()
			.render_to_string();
		assert_eq!(html, r#"<td class="wide" colspan="2"></td>"#);
	}
}
