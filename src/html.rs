//! Server-side markup tree.
//!
//! This module provides the minimal view tree the table renderer emits:
//! elements, text nodes, fragments and the empty node. Rendering escapes
//! text and attribute values, closes void elements without children and
//! drops boolean attributes whose value is falsy.
//!
//! ## Example
//!
//! ```
//! use sortable_tables::html::{Element, Node};
//!
//! let cell = Element::new("td")
//! 	.attr("class", "name")
//! 	.child("Alice")
//! 	.into_node();
//!
//! assert_eq!(cell.render_to_string(), r#"<td class="name">Alice</td>"#);
//! ```

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Returns a borrowed reference when
/// no escaping is needed.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// HTML boolean attributes that are only emitted when their value is truthy.
///
/// Boolean attributes are active by mere presence: `<button disabled="false">`
/// is still disabled. Falsy values therefore suppress the attribute entirely.
const BOOLEAN_ATTRS: &[&str] = &[
	"autofocus",
	"checked",
	"disabled",
	"hidden",
	"inert",
	"multiple",
	"readonly",
	"required",
	"selected",
];

/// Returns whether a boolean attribute value should result in the attribute
/// being emitted.
///
/// Empty strings, `"false"` and `"0"` are falsy; everything else is truthy.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}

/// A unified representation of renderable markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An HTML element.
	Element(Element),
	/// A text node, escaped on render.
	Text(Cow<'static, str>),
	/// A sequence of nodes with no wrapper element.
	Fragment(Vec<Node>),
	/// Renders nothing.
	Empty,
}

impl Node {
	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment node.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_node()).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the node tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_inner(&mut output);
		output
	}

	fn render_inner(&self, output: &mut String) {
		match self {
			Node::Element(el) => el.render_inner(output),
			Node::Text(text) => output.push_str(&html_escape(text)),
			Node::Fragment(children) => {
				for child in children {
					child.render_inner(output);
				}
			}
			Node::Empty => {}
		}
	}
}

/// An HTML element in the markup tree.
///
/// Attributes keep insertion order. Void elements (`br`, `hr`, `input`, …)
/// are self-closed and never render children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Node>,
	is_void: bool,
}

impl Element {
	/// Creates a new element with the given tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a boolean attribute.
	///
	/// When `value` is true the attribute is emitted with its name as the
	/// value (`disabled="disabled"`); when false it is omitted.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_node()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Wraps the element into a [`Node`].
	pub fn into_node(self) -> Node {
		Node::Element(self)
	}

	fn render_inner(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);

		for (name, value) in &self.attrs {
			let name_str: &str = name.as_ref();
			if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
				continue;
			}

			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}

		if self.is_void {
			output.push_str(" />");
		} else {
			output.push('>');
			for child in &self.children {
				child.render_inner(output);
			}
			output.push_str("</");
			output.push_str(&self.tag);
			output.push('>');
		}
	}
}

/// Trait for types that can be converted into a [`Node`].
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_html_escape_no_special_chars() {
		assert_eq!(html_escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("\"x\" 'y'", "&quot;x&quot; &#x27;y&#x27;")]
	fn test_html_escape_special_chars(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), Cow::<str>::Owned(expected.to_string()));
	}

	#[rstest]
	fn test_element_renders_attrs_in_order() {
		let el = Element::new("th").attr("class", "col").attr("scope", "col");
		assert_eq!(
			el.into_node().render_to_string(),
			r#"<th class="col" scope="col"></th>"#
		);
	}

	#[rstest]
	fn test_text_is_escaped() {
		let node = Node::text("<script>alert(1)</script>");
		assert_eq!(
			node.render_to_string(),
			"&lt;script&gt;alert(1)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_attr_value_is_escaped() {
		let el = Element::new("a").attr("href", "/x?a=1&b=2");
		assert_eq!(
			el.into_node().render_to_string(),
			r#"<a href="/x?a=1&amp;b=2"></a>"#
		);
	}

	#[rstest]
	fn test_void_element_self_closes() {
		let el = Element::new("br");
		assert_eq!(el.into_node().render_to_string(), "<br />");
	}

	#[rstest]
	#[case("false", "<button>Go</button>")]
	#[case("0", "<button>Go</button>")]
	#[case("", "<button>Go</button>")]
	#[case("disabled", r#"<button disabled="disabled">Go</button>"#)]
	fn test_boolean_attr_falsy_values_dropped(#[case] value: &'static str, #[case] expected: &str) {
		let el = Element::new("button").attr("disabled", value).child("Go");
		assert_eq!(el.into_node().render_to_string(), expected);
	}

	#[rstest]
	fn test_bool_attr_helper() {
		let on = Element::new("input").bool_attr("checked", true);
		let off = Element::new("input").bool_attr("checked", false);
		assert_eq!(
			on.into_node().render_to_string(),
			r#"<input checked="checked" />"#
		);
		assert_eq!(off.into_node().render_to_string(), "<input />");
	}

	#[rstest]
	fn test_fragment_concatenates_children() {
		let node = Node::fragment(vec![
			Element::new("td").child("a").into_node(),
			Element::new("td").child("b").into_node(),
			Node::empty(),
		]);
		assert_eq!(node.render_to_string(), "<td>a</td><td>b</td>");
	}
}
