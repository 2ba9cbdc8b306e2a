//! Property-based tests for pastegrid.
//!
//! These tests use proptest to generate random pastes and verify that the
//! pipeline maintains its invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: Parsing never crashes on any input
//! 2. **Determinism**: Same input always produces same output
//! 3. **Rectangularity**: Every row has one cell per header
//! 4. **Invariants**: Identifiers are fixed points, integer columns are numeric
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p pastegrid --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p pastegrid --test property_tests
//! ```

use proptest::prelude::*;

use pastegrid::classify::{is_blank, is_numeric};
use pastegrid::inference::infer;
use pastegrid::input::{SpanCell, expand};
use pastegrid::{
    ColumnType, NamingConvention, NumericLocale, Pastegrid, PastegridConfig, RawMatrix,
    normalize_identifier,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cells a spreadsheet paste typically contains.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        // Integers, some with thousands separators
        "-?[1-9][0-9]{0,2}(,[0-9]{3}){0,2}",
        // Decimals
        "-?[0-9]{1,4}\\.[0-9]{1,3}",
        // Codes with leading zeros
        "0[0-9]{2,4}",
        // Booleans
        "(true|false|TRUE|False)",
        // Words
        "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
        // Blank
        Just(String::new()),
    ]
}

/// Header text with punctuation, spaces and digits.
fn header_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ .!@$%\\-]{0,20}"
}

fn locale() -> impl Strategy<Value = NumericLocale> {
    prop::sample::select(NumericLocale::ALL.to_vec())
}

fn convention() -> impl Strategy<Value = NamingConvention> {
    prop::sample::select(NamingConvention::ALL.to_vec())
}

/// A rectangular grid with a header row and at least one data row.
fn grid() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..6, 2usize..12).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(cell(), cols), rows)
    })
}

/// Generate completely random strings (edge cases)
fn random_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..300)
        .prop_map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// Pipeline Properties
// =============================================================================

mod pipeline_tests {
    use super::*;

    proptest! {
        /// Parsing never panics, whatever the input.
        #[test]
        fn never_panics(input in random_text()) {
            let _ = Pastegrid::new().parse(&input);
        }

        /// Every successful parse is rectangular.
        #[test]
        fn output_is_rectangular(grid in grid(), header in prop::collection::vec(header_text(), 1..6)) {
            let mut lines = vec![header.join("\t")];
            lines.extend(grid.iter().map(|row| row.join("\t")));
            let input = lines.join("\n");

            if let Ok(table) = Pastegrid::new().parse(&input) {
                prop_assert!(table.is_rectangular());
                prop_assert_eq!(table.headers.len(), table.column_types.len());
                for row in &table.rows {
                    prop_assert_eq!(row.len(), table.headers.len());
                }
            }
        }

        /// Same input, same configuration, same table.
        #[test]
        fn parse_is_deterministic(input in random_text(), locale in locale(), convention in convention()) {
            let config = PastegridConfig::default()
                .with_locale(locale)
                .with_convention(convention);
            let parser = Pastegrid::with_config(config);
            let first = parser.parse(&input).ok();
            let second = parser.parse(&input).ok();
            prop_assert_eq!(first, second);
        }
    }
}

// =============================================================================
// Type Inference Properties
// =============================================================================

mod inference_tests {
    use super::*;

    proptest! {
        /// Integer and numeric columns only contain numeric cells.
        #[test]
        fn numeric_columns_contain_only_numbers(grid in grid(), locale in locale()) {
            let matrix = RawMatrix::new(grid.clone());
            let inferred = infer(&matrix, Some(locale)).unwrap();

            for (col, column_type) in inferred.column_types.iter().enumerate() {
                if column_type.is_numeric() {
                    for row in &grid[1..] {
                        let raw = &row[col];
                        prop_assert!(is_blank(raw) || is_numeric(raw, locale), "{raw:?}");
                    }
                }
            }
        }

        /// Converted rows mirror the data rows one to one.
        #[test]
        fn blank_cells_become_missing(grid in grid(), locale in locale()) {
            let matrix = RawMatrix::new(grid.clone());
            let inferred = infer(&matrix, Some(locale)).unwrap();

            prop_assert_eq!(inferred.rows.len(), grid.len() - 1);
            for (typed_row, raw_row) in inferred.rows.iter().zip(&grid[1..]) {
                for (typed, raw) in typed_row.iter().zip(raw_row) {
                    prop_assert_eq!(typed.is_missing(), is_blank(raw));
                }
            }
        }

        /// Leading-zero codes never make a column numeric.
        #[test]
        fn leading_zero_codes_are_text(code in "0[0-9]{1,6}", locale in locale()) {
            let matrix = RawMatrix::from_rows(vec![vec!["code".to_string()], vec![code]]);
            let inferred = infer(&matrix, Some(locale)).unwrap();
            prop_assert_eq!(inferred.column_types[0], ColumnType::String);
        }
    }
}

// =============================================================================
// Identifier Properties
// =============================================================================

mod identifier_tests {
    use super::*;

    proptest! {
        /// Normalizing twice equals normalizing once.
        #[test]
        fn normalization_is_idempotent(name in header_text(), convention in convention()) {
            let once = normalize_identifier(&name, convention);
            let twice = normalize_identifier(&once, convention);
            prop_assert_eq!(once, twice);
        }

        /// Identifiers are never empty and never start with a digit.
        #[test]
        fn identifiers_are_valid(name in any::<String>(), convention in convention()) {
            let ident = normalize_identifier(&name, convention);
            prop_assert!(!ident.is_empty());
            prop_assert!(!ident.starts_with(|c: char| c.is_ascii_digit()));
            prop_assert!(!ident.contains(char::is_whitespace));
        }
    }
}

// =============================================================================
// HTML Expansion Properties
// =============================================================================

mod html_tests {
    use super::*;

    fn span_table() -> impl Strategy<Value = Vec<Vec<SpanCell>>> {
        let span_cell = ("[a-z]{0,3}", 1usize..4, 1usize..4)
            .prop_map(|(text, colspan, rowspan)| SpanCell::spanning(text, colspan, rowspan));
        prop::collection::vec(prop::collection::vec(span_cell, 0..4), 0..6)
    }

    proptest! {
        /// Expansion always yields a rectangle and never drops the header row.
        #[test]
        fn expansion_is_rectangular(table in span_table()) {
            let matrix = expand(&table).unwrap();
            prop_assert!(matrix.is_rectangular());
            if !table.is_empty() {
                prop_assert!(!matrix.is_empty());
            }
            for row in matrix.data_rows() {
                prop_assert!(!row.iter().all(|cell| is_blank(cell)));
            }
        }
    }
}
