//! Column type inference and cell conversion.

use tracing::debug;

use crate::classify::{
    NumericLocale, clean_cell, fits_i64, is_blank, is_boolean, is_integer, is_numeric,
    looks_numeric, parse_number,
};
use crate::error::{InvalidTableKind, Result};
use crate::input::RawMatrix;
use crate::schema::{ColumnType, TypedValue};

/// Raw headers plus typed data, before header names are normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct InferredColumns {
    /// Header cells exactly as extracted.
    pub headers: Vec<String>,
    /// Converted data rows.
    pub rows: Vec<Vec<TypedValue>>,
    /// One type per column.
    pub column_types: Vec<ColumnType>,
}

/// Decides column types from data rows and converts every cell.
///
/// A single non-numeric cell makes the whole column a string column; there
/// is no majority vote. Blank cells carry no evidence, so a column with
/// only blanks stays [`ColumnType::Numeric`].
#[derive(Debug, Clone, Copy)]
pub struct TypeInferencer {
    locale: Option<NumericLocale>,
}

impl TypeInferencer {
    /// Create an inferencer; `None` means no locale was configured.
    pub fn new(locale: Option<NumericLocale>) -> Self {
        Self { locale }
    }

    /// Infer every column of `matrix` and convert its data rows.
    pub fn infer(&self, matrix: &RawMatrix) -> Result<InferredColumns> {
        let headers = match matrix.header() {
            Some(header) if !header.is_empty() => header.to_vec(),
            _ => return Err(InvalidTableKind::NoHeaders.into()),
        };
        if matrix.data_rows().is_empty() {
            return Err(InvalidTableKind::NoDataRows.into());
        }

        let width = headers.len();
        let mut column_types = Vec::with_capacity(width);
        for index in 0..width {
            let values: Vec<&str> = matrix.column_values(index).collect();
            let column_type = self.infer_column_type(&values)?;
            debug!(column = index, %column_type, "inferred column type");
            column_types.push(column_type);
        }

        let rows = matrix
            .data_rows()
            .iter()
            .map(|row| {
                column_types
                    .iter()
                    .enumerate()
                    .map(|(index, column_type)| {
                        let raw = row.get(index).map(String::as_str).unwrap_or("");
                        self.convert(raw, *column_type)
                    })
                    .collect()
            })
            .collect();

        Ok(InferredColumns {
            headers,
            rows,
            column_types,
        })
    }

    /// Decide the type of one column from its data cells.
    pub fn infer_column_type(&self, values: &[&str]) -> Result<ColumnType> {
        let present: Vec<&str> = values.iter().copied().filter(|v| !is_blank(v)).collect();
        if present.is_empty() {
            return Ok(ColumnType::Numeric);
        }

        let all_numeric = match self.locale {
            Some(locale) => present.iter().all(|v| is_numeric(v, locale)),
            None if present.iter().any(|v| looks_numeric(v)) => {
                return Err(InvalidTableKind::AmbiguousLocale.into());
            }
            // Without a digit nothing can be numeric under any locale.
            None => false,
        };

        let column_type = match self.locale {
            Some(locale) if all_numeric => {
                if present.iter().all(|v| is_integer(v, locale)) {
                    ColumnType::Integer
                } else {
                    ColumnType::Numeric
                }
            }
            _ if present.iter().all(|v| is_boolean(v)) => ColumnType::Boolean,
            _ => ColumnType::String,
        };
        Ok(column_type)
    }

    /// Convert one raw cell according to its column type.
    pub fn convert(&self, raw: &str, column_type: ColumnType) -> TypedValue {
        if is_blank(raw) {
            return TypedValue::Missing;
        }

        let number = self.locale.and_then(|locale| parse_number(raw, locale));
        match (column_type, number) {
            (ColumnType::Integer, Some(value)) if fits_i64(value) => TypedValue::Integer {
                value: value as i64,
            },
            (ColumnType::Integer | ColumnType::Numeric, Some(value)) => {
                TypedValue::Numeric { value }
            }
            (ColumnType::Boolean, _) => {
                let text = clean_cell(raw);
                TypedValue::Boolean {
                    value: text.eq_ignore_ascii_case("true"),
                    text,
                }
            }
            _ => TypedValue::text(clean_cell(raw)),
        }
    }
}

/// Infer column types of `matrix` under `locale`.
pub fn infer(matrix: &RawMatrix, locale: Option<NumericLocale>) -> Result<InferredColumns> {
    TypeInferencer::new(locale).infer(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PastegridError;

    fn column_type(values: &[&str]) -> ColumnType {
        TypeInferencer::new(Some(NumericLocale::CommaDot))
            .infer_column_type(values)
            .unwrap()
    }

    fn kind(err: PastegridError) -> InvalidTableKind {
        err.invalid_table_kind().unwrap()
    }

    #[test]
    fn test_infer_integer_type() {
        assert_eq!(column_type(&["1", "2", "3", "100"]), ColumnType::Integer);
    }

    #[test]
    fn test_infer_numeric_type() {
        assert_eq!(column_type(&["1.5", "2", "-0.001"]), ColumnType::Numeric);
        assert_eq!(column_type(&["-123", "-456.78", "-0.001"]), ColumnType::Numeric);
    }

    #[test]
    fn test_one_text_cell_forces_string() {
        assert_eq!(column_type(&["1", "2", "x"]), ColumnType::String);
    }

    #[test]
    fn test_leading_zero_codes_are_strings() {
        assert_eq!(column_type(&["001", "003"]), ColumnType::String);
    }

    #[test]
    fn test_boolean_promotion() {
        assert_eq!(column_type(&["True", "False", "True"]), ColumnType::Boolean);
        assert_eq!(column_type(&["True", "False", "Maybe"]), ColumnType::String);
    }

    #[test]
    fn test_blanks_are_ignored() {
        assert_eq!(column_type(&["1", "", "  ", "3"]), ColumnType::Integer);
        assert_eq!(column_type(&["true", ""]), ColumnType::Boolean);
    }

    #[test]
    fn test_all_blank_column_stays_numeric() {
        assert_eq!(column_type(&["", " "]), ColumnType::Numeric);
    }

    #[test]
    fn test_missing_locale() {
        let inferencer = TypeInferencer::new(None);
        let err = inferencer.infer_column_type(&["1", "2"]).unwrap_err();
        assert_eq!(kind(err), InvalidTableKind::AmbiguousLocale);

        assert_eq!(
            inferencer.infer_column_type(&["apple", "pear"]).unwrap(),
            ColumnType::String
        );
        assert_eq!(
            inferencer.infer_column_type(&["TRUE", "false"]).unwrap(),
            ColumnType::Boolean
        );
    }

    #[test]
    fn test_convert_values() {
        let inferencer = TypeInferencer::new(Some(NumericLocale::DotComma));
        assert_eq!(
            inferencer.convert("1.234.567,89", ColumnType::Numeric),
            TypedValue::Numeric { value: 1234567.89 }
        );
        assert_eq!(
            inferencer.convert("1.000", ColumnType::Integer),
            TypedValue::Integer { value: 1000 }
        );
        assert_eq!(inferencer.convert("  ", ColumnType::Integer), TypedValue::Missing);
        assert_eq!(inferencer.convert("", ColumnType::String), TypedValue::Missing);
        assert_eq!(
            inferencer.convert(" a\u{00A0}b ", ColumnType::String),
            TypedValue::text("a b")
        );
        assert_eq!(
            inferencer.convert(" FALSE ", ColumnType::Boolean),
            TypedValue::Boolean {
                value: false,
                text: "FALSE".to_string()
            }
        );
    }

    #[test]
    fn test_infer_matrix() {
        let matrix = RawMatrix::from_rows(vec![
            vec!["id", "name", "score", "active", "empty"],
            vec!["1", "Ada", "9.5", "true", ""],
            vec!["2", "", "7", "False", ""],
        ]);
        let inferred = infer(&matrix, Some(NumericLocale::CommaDot)).unwrap();

        assert_eq!(inferred.headers, vec!["id", "name", "score", "active", "empty"]);
        assert_eq!(
            inferred.column_types,
            vec![
                ColumnType::Integer,
                ColumnType::String,
                ColumnType::Numeric,
                ColumnType::Boolean,
                ColumnType::Numeric,
            ]
        );
        assert_eq!(inferred.rows[1][0], TypedValue::Integer { value: 2 });
        assert_eq!(inferred.rows[1][1], TypedValue::Missing);
        assert_eq!(inferred.rows[1][2], TypedValue::Numeric { value: 7.0 });
        assert_eq!(inferred.rows[0][4], TypedValue::Missing);
    }

    #[test]
    fn test_header_excluded_from_inference() {
        let matrix = RawMatrix::from_rows(vec![vec!["2024"], vec!["x"]]);
        let inferred = infer(&matrix, Some(NumericLocale::CommaDot)).unwrap();
        assert_eq!(inferred.column_types, vec![ColumnType::String]);
    }

    #[test]
    fn test_no_data_rows() {
        let matrix = RawMatrix::from_rows(vec![vec!["a", "b"]]);
        let err = infer(&matrix, Some(NumericLocale::CommaDot)).unwrap_err();
        assert_eq!(kind(err), InvalidTableKind::NoDataRows);
    }

    #[test]
    fn test_no_headers() {
        let empty = RawMatrix::default();
        let err = infer(&empty, Some(NumericLocale::CommaDot)).unwrap_err();
        assert_eq!(kind(err), InvalidTableKind::NoHeaders);

        let zero_width = RawMatrix::new(vec![vec![], vec![]]);
        let err = infer(&zero_width, Some(NumericLocale::CommaDot)).unwrap_err();
        assert_eq!(kind(err), InvalidTableKind::NoHeaders);
    }
}
