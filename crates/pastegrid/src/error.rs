//! Error types for the pastegrid library.

use thiserror::Error;

/// Main error type for pastegrid operations.
#[derive(Debug, Error)]
pub enum PastegridError {
    /// The paste could not be turned into a table.
    #[error("Invalid table format: {0}")]
    InvalidTable(#[from] InvalidTableKind),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PastegridError {
    /// The table-level cause, if this is an invalid table error.
    pub fn invalid_table_kind(&self) -> Option<InvalidTableKind> {
        match self {
            PastegridError::InvalidTable(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Why a paste was rejected as a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTableKind {
    /// Input was blank.
    #[error("Input is empty")]
    EmptyInput,

    /// The first extracted row has no columns.
    #[error("No headers found in the table")]
    NoHeaders,

    /// Only a header row could be extracted.
    #[error("No data rows found in the table")]
    NoDataRows,

    /// HTML input without a usable `<table>` element.
    #[error("No <table> element found in the HTML input")]
    NoTableFound,

    /// Padding or span expansion would exceed the cell limit.
    #[error("Table is too large to expand into a grid")]
    TooLarge,

    /// A numeric-looking cell needs a numeric locale but none was configured.
    #[error("No numeric locale selected; cannot classify numeric-looking cells")]
    AmbiguousLocale,
}

/// Result type alias for pastegrid operations.
pub type Result<T> = std::result::Result<T, PastegridError>;
