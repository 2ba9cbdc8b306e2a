//! Column types and typed cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Text values.
    String,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Numeric,
    /// `true`/`false` in any letter case.
    Boolean,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Numeric)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Numeric => "numeric",
            ColumnType::Boolean => "boolean",
        }
    }
}

// Columns with no evidence stay numeric.
impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Numeric
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell converted according to its column type.
///
/// `Missing` means the raw cell was blank after trimming; a present empty
/// string cannot occur, so emitters never have to guess between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypedValue {
    Missing,
    Text { value: String },
    Integer { value: i64 },
    Numeric { value: f64 },
    /// Parsed value plus the cleaned spelling from the paste.
    Boolean { value: bool, text: String },
}

impl TypedValue {
    pub fn text(value: impl Into<String>) -> Self {
        TypedValue::Text {
            value: value.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TypedValue::Missing)
    }

    /// Numeric view of integer and numeric cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Integer { value } => Some(*value as f64),
            TypedValue::Numeric { value } => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer { value } => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Text of string and boolean cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Text { value } => Some(value),
            TypedValue::Boolean { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_serde_names() {
        let json = serde_json::to_string(&vec![
            ColumnType::String,
            ColumnType::Integer,
            ColumnType::Numeric,
            ColumnType::Boolean,
        ])
        .unwrap();
        assert_eq!(json, r#"["string","integer","numeric","boolean"]"#);
    }

    #[test]
    fn test_typed_value_json_shape() {
        let json = serde_json::to_value(TypedValue::Boolean {
            value: true,
            text: "TRUE".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "boolean");
        assert_eq!(json["value"], true);
        assert_eq!(json["text"], "TRUE");

        let missing = serde_json::to_value(TypedValue::Missing).unwrap();
        assert_eq!(missing, serde_json::json!({"kind": "missing"}));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(TypedValue::Integer { value: 3 }.as_f64(), Some(3.0));
        assert_eq!(TypedValue::text("a").as_str(), Some("a"));
        assert!(TypedValue::Missing.is_missing());
        assert_eq!(TypedValue::Numeric { value: 1.5 }.as_i64(), None);
    }
}
