//! Error types for table rendering.
//!
//! Everything here is a configuration error: it is detected when a render is
//! requested, before any markup is produced. Per-cell content templates are
//! caller closures and their failures are not caught by this crate.

use thiserror::Error;

/// Errors that can occur when a table render is requested.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
	/// The table was built without any columns.
	#[error("at least one column required")]
	NoColumns,

	/// No items were assigned to the table.
	#[error("items assign required")]
	MissingItems,

	/// No meta (order state + sortability capability) was assigned.
	#[error("meta assign required")]
	MissingMeta,

	/// Neither a path target nor an event name was configured, or both were.
	#[error(
		"navigation mode invalid: configure exactly one of a path target \
		 (link-based sorting) or an event name (click-based sorting)"
	)]
	InvalidNavigation,
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
