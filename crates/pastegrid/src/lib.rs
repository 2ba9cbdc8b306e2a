//! pastegrid: typed tables from clipboard pastes.
//!
//! A paste is either delimiter-separated text (spreadsheet cells, CSV, log
//! dumps) or an HTML fragment containing a `<table>`. pastegrid splits it
//! into a rectangular matrix, turns the header row into identifiers, infers
//! one type per column and converts every cell to that type.
//!
//! # Core Principles
//!
//! - **Deterministic**: The same paste and configuration always give the same table
//! - **All-or-nothing**: A paste either yields a complete table or an error
//! - **Explicit configuration**: Locale and naming convention are passed in, never looked up
//!
//! # Example
//!
//! ```
//! use pastegrid::{ColumnType, NamingConvention, Pastegrid, PastegridConfig};
//!
//! let config = PastegridConfig::default().with_convention(NamingConvention::SnakeCase);
//! let table = Pastegrid::with_config(config)
//!     .parse("Full Name\tAge\nAda\t36\nAlan\t41")
//!     .unwrap();
//!
//! assert_eq!(table.headers, vec!["full_name", "age"]);
//! assert_eq!(table.column_types, vec![ColumnType::String, ColumnType::Integer]);
//! ```

pub mod classify;
pub mod error;
pub mod inference;
pub mod input;
pub mod naming;
pub mod schema;

mod pastegrid;

pub use crate::pastegrid::{Pastegrid, PastegridConfig, parse_table};
pub use classify::NumericLocale;
pub use error::{InvalidTableKind, PastegridError, Result};
pub use input::{Delimiter, RawMatrix, SourceFormat, SourceMetadata};
pub use naming::{IdentifierNormalizer, NamingConvention, ScriptRange, normalize_identifier};
pub use schema::{ColumnType, StructuredTable, TypedValue};
