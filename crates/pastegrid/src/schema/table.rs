//! The typed, rectangular result of a parse.

use serde::{Deserialize, Serialize};

use super::types::{ColumnType, TypedValue};
use crate::error::Result;

/// Headers, typed rows and one type per column.
///
/// Every row has exactly `headers.len()` cells and `column_types` has one
/// entry per header. Header names are not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredTable {
    /// Normalized column identifiers.
    pub headers: Vec<String>,
    /// Data rows (header excluded).
    pub rows: Vec<Vec<TypedValue>>,
    /// Inferred type of each column.
    pub column_types: Vec<ColumnType>,
}

impl StructuredTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<TypedValue>>, column_types: Vec<ColumnType>) -> Self {
        Self {
            headers,
            rows,
            column_types,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether headers, types and every row agree on the column count.
    pub fn is_rectangular(&self) -> bool {
        let width = self.headers.len();
        self.column_types.len() == width && self.rows.iter().all(|row| row.len() == width)
    }

    /// Get all values for a column by index.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &TypedValue> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Get a column's values by header name (first match).
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&TypedValue>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.column(index).collect())
    }

    /// Header names that occur more than once, in first-seen order.
    pub fn duplicate_headers(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, header) in self.headers.iter().enumerate() {
            if self.headers[..i].contains(header) && !duplicates.contains(&header.as_str()) {
                duplicates.push(header);
            }
        }
        duplicates
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
