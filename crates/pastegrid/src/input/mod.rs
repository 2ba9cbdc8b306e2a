//! Raw matrix extraction from plain-text and HTML pastes.

mod html;
mod source;
mod text;

pub use html::{
    HtmlTable, SpanCell, TableCell, TableElement, expand, looks_like_html, parse_html_table,
};
pub use source::{Delimiter, MAX_CELLS, RawMatrix, SourceFormat, SourceMetadata};
pub use text::{DetectedMatrix, SplitScore, detect, detect_matrix, score_split};
