//! Typed table representation handed to code emitters.

mod table;
mod types;

pub use table::StructuredTable;
pub use types::{ColumnType, TypedValue};
