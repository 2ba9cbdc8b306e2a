//! Raw matrix representation and source metadata.

use serde::{Deserialize, Serialize};

use crate::classify::is_blank;
use crate::error::{InvalidTableKind, Result};

/// Most cells a padded matrix may hold.
pub const MAX_CELLS: usize = 2_000_000;

/// Column separators tried on plain-text pastes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
    Pipe,
    /// Runs of whitespace (fixed-width dumps).
    Whitespace,
}

impl Delimiter {
    /// Candidates in the order they are tried; earlier wins ties.
    pub const PRIORITY: [Delimiter; 5] = [
        Delimiter::Tab,
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Pipe,
        Delimiter::Whitespace,
    ];

    /// Regex used to split a line.
    pub fn pattern(&self) -> &'static str {
        match self {
            Delimiter::Tab => r"\t|\s\t",
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Pipe => r"\|",
            Delimiter::Whitespace => r"\s+",
        }
    }

    /// Short format name, as reported in [`SourceMetadata`].
    pub fn format_name(&self) -> &'static str {
        match self {
            Delimiter::Tab => "tsv",
            Delimiter::Comma => "csv",
            Delimiter::Semicolon => "csv-semicolon",
            Delimiter::Pipe => "psv",
            Delimiter::Whitespace => "whitespace",
        }
    }
}

/// Which branch produced the raw matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "delimiter", rename_all = "snake_case")]
pub enum SourceFormat {
    Html,
    Delimited(Delimiter),
}

impl SourceFormat {
    pub fn format_name(&self) -> &'static str {
        match self {
            SourceFormat::Html => "html",
            SourceFormat::Delimited(delimiter) => delimiter.format_name(),
        }
    }
}

/// Metadata about the paste that was parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Detected source branch.
    pub source: SourceFormat,
    /// Short format name (html, tsv, csv, ...).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
}

impl SourceMetadata {
    pub fn new(source: SourceFormat, row_count: usize, column_count: usize) -> Self {
        Self {
            source,
            format: source.format_name().to_string(),
            row_count,
            column_count,
        }
    }
}

/// Untyped grid of cells; row 0 is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatrix {
    rows: Vec<Vec<String>>,
}

impl RawMatrix {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a matrix from string slices.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Number of rows including the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Fail with `TooLarge` when a `rows` by `width` grid exceeds [`MAX_CELLS`].
    pub fn check_capacity(rows: usize, width: usize) -> Result<()> {
        if rows.saturating_mul(width) > MAX_CELLS {
            return Err(InvalidTableKind::TooLarge.into());
        }
        Ok(())
    }

    /// Pad every row with empty cells up to the widest row.
    pub fn pad(&mut self) {
        let width = self.width();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }

    /// Remove data rows whose cells are all blank. The header row stays.
    pub fn drop_blank_data_rows(&mut self) {
        let mut index = 0;
        self.rows.retain(|row| {
            let keep = index == 0 || !row.iter().all(|cell| is_blank(cell));
            index += 1;
            keep
        });
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Iterate the data cells of one column.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.data_rows()
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}
