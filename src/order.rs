//! Multi-column order state and sortability.
//!
//! An [`OrderState`] is the aligned pair of an ordered field list and an
//! ordered direction list. Resolving a field against it yields that field's
//! position and direction ([`SortState`]), which drives the header cell's
//! direction indicator and ARIA attribute.

use serde::{Deserialize, Serialize};

/// Sort direction, distinguishing ascending/descending and null placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
	/// Ascending order.
	Asc,
	/// Ascending order, nulls first.
	AscNullsFirst,
	/// Ascending order, nulls last.
	AscNullsLast,
	/// Descending order.
	Desc,
	/// Descending order, nulls first.
	DescNullsFirst,
	/// Descending order, nulls last.
	DescNullsLast,
}

impl Direction {
	/// Returns whether this direction is in the ascending family.
	pub fn is_ascending(&self) -> bool {
		matches!(self, Self::Asc | Self::AscNullsFirst | Self::AscNullsLast)
	}

	/// Returns whether this direction is in the descending family.
	pub fn is_descending(&self) -> bool {
		!self.is_ascending()
	}

	/// Returns the `aria-sort` value for this direction.
	pub fn aria(&self) -> &'static str {
		if self.is_ascending() {
			"ascending"
		} else {
			"descending"
		}
	}

	/// Returns the direction with the opposite family, preserving the
	/// null-placement policy.
	pub fn toggle(&self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::AscNullsFirst => Self::DescNullsFirst,
			Self::AscNullsLast => Self::DescNullsLast,
			Self::Desc => Self::Asc,
			Self::DescNullsFirst => Self::AscNullsFirst,
			Self::DescNullsLast => Self::AscNullsLast,
		}
	}

	/// Returns the snake_case wire name, as used in query parameters.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::AscNullsFirst => "asc_nulls_first",
			Self::AscNullsLast => "asc_nulls_last",
			Self::Desc => "desc",
			Self::DescNullsFirst => "desc_nulls_first",
			Self::DescNullsLast => "desc_nulls_last",
		}
	}

	/// Parses a wire name back into a direction.
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"asc" => Some(Self::Asc),
			"asc_nulls_first" => Some(Self::AscNullsFirst),
			"asc_nulls_last" => Some(Self::AscNullsLast),
			"desc" => Some(Self::Desc),
			"desc_nulls_first" => Some(Self::DescNullsFirst),
			"desc_nulls_last" => Some(Self::DescNullsLast),
			_ => None,
		}
	}
}

/// Current multi-column sort: field list and direction list, index-aligned.
///
/// `order_by` absent means "unordered". Index *i* in `order_by` corresponds
/// to index *i* in `order_directions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
	/// Ordered sequence of field identifiers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_by: Option<Vec<String>>,
	/// Ordered sequence of directions, aligned with `order_by`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_directions: Option<Vec<Direction>>,
}

impl OrderState {
	/// Creates an unordered state.
	pub fn unordered() -> Self {
		Self::default()
	}

	/// Creates an order state from aligned field/direction pairs.
	///
	/// # Example
	///
	/// ```
	/// use sortable_tables::{Direction, OrderState};
	///
	/// let order = OrderState::from_pairs([("name", Direction::Desc)]);
	/// assert_eq!(order.resolve("name").direction, Some(Direction::Desc));
	/// ```
	pub fn from_pairs<I, S>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (S, Direction)>,
		S: Into<String>,
	{
		let (fields, directions): (Vec<String>, Vec<Direction>) = pairs
			.into_iter()
			.map(|(field, direction)| (field.into(), direction))
			.unzip();
		Self {
			order_by: Some(fields),
			order_directions: Some(directions),
		}
	}

	/// Resolves a field's position and direction in this order state.
	///
	/// The direction defaults to [`Direction::Asc`] when the field is listed
	/// in `order_by` but `order_directions` is absent: an explicit order-by
	/// field with no recorded direction is treated as ascending.
	pub fn resolve(&self, field: &str) -> SortState {
		let index = self
			.order_by
			.as_ref()
			.and_then(|fields| fields.iter().position(|f| f == field));
		let direction = index.map(|i| {
			self.order_directions
				.as_ref()
				.and_then(|directions| directions.get(i).copied())
				.unwrap_or(Direction::Asc)
		});
		SortState { index, direction }
	}
}

/// A column's place in the current multi-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
	/// Position in the order list, absent when the field is not ordered.
	pub index: Option<usize>,
	/// Direction at that position, absent when `index` is absent.
	pub direction: Option<Direction>,
}

impl SortState {
	/// Returns the `aria-sort` value for this column.
	///
	/// Only the primary sort key (index 0) reports a value; secondarily
	/// sorted columns report none, since only the primary key is "the" sort
	/// for accessibility purposes.
	pub fn aria_sort(&self) -> Option<&'static str> {
		match (self.index, self.direction) {
			(Some(0), Some(direction)) => Some(direction.aria()),
			_ => None,
		}
	}
}

/// Capability reporting which fields may be used as sort keys.
pub trait SortSchema {
	/// Returns the identifiers of the sortable fields.
	fn sortable_fields(&self) -> Vec<String>;
}

impl SortSchema for Vec<String> {
	fn sortable_fields(&self) -> Vec<String> {
		self.clone()
	}
}

/// Returns whether a column's field may be used as a sort key.
///
/// A column without a field is never sortable. When no schema capability is
/// supplied every identified field is assumed sortable — the permissive
/// default; attach a [`SortSchema`] to opt into explicit sortability.
pub fn is_sortable(field: Option<&str>, schema: Option<&dyn SortSchema>) -> bool {
	let Some(field) = field else {
		return false;
	};
	match schema {
		None => true,
		Some(schema) => schema.sortable_fields().iter().any(|f| f == field),
	}
}

/// Collaborator producing the order state that results from selecting a
/// field in the header.
pub trait OrderToggle {
	/// Returns the order state after the given field is selected.
	fn push_order(&self, current: &OrderState, field: &str) -> OrderState;
}

/// Standard toggle rule.
///
/// Selecting the current primary field flips its direction's family;
/// selecting any other field moves it to the front ascending, keeping the
/// remaining order entries behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicToggle;

impl OrderToggle for CyclicToggle {
	fn push_order(&self, current: &OrderState, field: &str) -> OrderState {
		let mut fields = current.order_by.clone().unwrap_or_default();
		let mut directions = current.order_directions.clone().unwrap_or_default();
		// fields listed without a recorded direction count as ascending
		directions.resize(fields.len(), Direction::Asc);

		let direction = match fields.iter().position(|f| f == field) {
			Some(0) => {
				fields.remove(0);
				directions.remove(0).toggle()
			}
			Some(position) => {
				fields.remove(position);
				directions.remove(position);
				Direction::Asc
			}
			None => Direction::Asc,
		};

		fields.insert(0, field.to_string());
		directions.insert(0, direction);
		OrderState {
			order_by: Some(fields),
			order_directions: Some(directions),
		}
	}
}
