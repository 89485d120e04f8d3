//! Sortable data table rendering.
//!
//! This crate renders an HTML data table whose header columns toggle sort
//! order, driven by an externally supplied pagination/sort metadata object.
//! It computes per-column sort state (position in the multi-column order,
//! direction, ARIA value), decides which columns are sortable, and builds the
//! sort-toggle target — either a link with updated query parameters or an
//! abstract click event — while merging a layered configuration of rendering
//! options (library defaults → application overrides → per-call overrides)
//! with deep-merge semantics.
//!
//! # Features
//!
//! - **Multi-column order state**: aligned field/direction lists with six
//!   directions distinguishing null placement
//! - **Sortability**: per-column, via an optional schema capability
//! - **Navigation modes**: path-based links or abstract click events
//! - **Layered options**: deep-merged nested attribute maps for every
//!   rendered element
//! - **Collaborator seams**: order toggling and URL building are traits with
//!   shipped defaults
//!
//! # Example
//!
//! ```
//! use sortable_tables::html::Node;
//! use sortable_tables::{
//! 	Column, Direction, OrderState, Table, TableConfig, TableMeta,
//! };
//!
//! struct User {
//! 	name: String,
//! 	age: u32,
//! }
//!
//! let users = vec![
//! 	User { name: "Alice".to_string(), age: 30 },
//! 	User { name: "Bob".to_string(), age: 25 },
//! ];
//!
//! let html = Table::new()
//! 	.column(
//! 		Column::new("Name")
//! 			.field("name")
//! 			.content(|user: &User| Node::text(user.name.clone())),
//! 	)
//! 	.column(
//! 		Column::new("Age")
//! 			.field("age")
//! 			.content(|user: &User| Node::text(user.age.to_string())),
//! 	)
//! 	.path("/users")
//! 	.items(users)
//! 	.meta(TableMeta::new(OrderState::from_pairs([
//! 		("name", Direction::Asc),
//! 	])))
//! 	.render_to_string(&TableConfig::new())
//! 	.unwrap();
//!
//! assert!(html.contains(r#"aria-sort="ascending""#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod html;
pub mod nav;
pub mod options;
pub mod order;
pub mod table;

// Re-exports for convenience
pub use error::{Result, TableError};
pub use nav::{NavigationMode, PathBuilder, QueryPathBuilder};
pub use options::{AttrMap, RenderOptions, TableConfig};
pub use order::{CyclicToggle, Direction, OrderState, OrderToggle, SortSchema, SortState};
pub use table::{Column, Table, TableMeta};
