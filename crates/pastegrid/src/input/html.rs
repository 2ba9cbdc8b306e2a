//! HTML table expansion.
//!
//! The expander only needs rows, cells, cell text and the two span
//! attributes. [`TableElement`] and [`TableCell`] capture exactly that, so
//! the algorithm does not depend on the HTML parser; [`HtmlTable`] adapts
//! a `scraper` element.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::source::RawMatrix;
use crate::classify::clean_cell;
use crate::error::{InvalidTableKind, Result};

static TABLE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<table[\s>/]").unwrap());

// Browsers clamp spans to these values.
const MAX_COLSPAN: usize = 1000;
const MAX_ROWSPAN: usize = 65534;

/// One `<td>`/`<th>` cell.
pub trait TableCell {
    /// Raw text content.
    fn text(&self) -> String;
    /// Number of columns covered, at least 1.
    fn colspan(&self) -> usize;
    /// Number of rows covered, at least 1.
    fn rowspan(&self) -> usize;
}

/// A table as rows of cells in document order.
pub trait TableElement {
    type Cell: TableCell;

    fn rows(&self) -> Vec<Vec<Self::Cell>>;
}

/// Expand spans into a dense matrix.
///
/// A spanning cell's text is written into every slot it covers. Rows are
/// padded to the widest row and blank data rows are dropped; the header
/// row is kept even when blank. Fails with `TooLarge` once the grid would
/// need more than [`MAX_CELLS`](super::MAX_CELLS) slots.
pub fn expand<T: TableElement>(table: &T) -> Result<RawMatrix> {
    let source_rows = table.rows();
    let row_count = source_rows.len();
    let mut grid: Vec<Vec<Option<String>>> = vec![Vec::new(); row_count];
    let mut width = 0;

    for (row_index, cells) in source_rows.iter().enumerate() {
        let mut col = 0;
        for cell in cells {
            while grid[row_index].get(col).is_some_and(Option::is_some) {
                col += 1;
            }

            let text = clean_cell(&cell.text());
            let colspan = cell.colspan().clamp(1, MAX_COLSPAN);
            let rowspan = cell.rowspan().clamp(1, MAX_ROWSPAN);
            let last_row = (row_index + rowspan).min(row_count);

            // Every row is padded to `width` later, so budget the full grid.
            if col + colspan > width {
                width = col + colspan;
                RawMatrix::check_capacity(row_count, width)?;
            }

            for target in &mut grid[row_index..last_row] {
                if target.len() < col + colspan {
                    target.resize(col + colspan, None);
                }
                for slot in &mut target[col..col + colspan] {
                    *slot = Some(text.clone());
                }
            }
            col += colspan;
        }
    }

    let mut matrix = RawMatrix::new(
        grid.into_iter()
            .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
            .collect(),
    );
    matrix.pad();
    matrix.drop_blank_data_rows();
    Ok(matrix)
}

/// Whether the paste should go through the HTML branch.
pub fn looks_like_html(input: &str) -> bool {
    TABLE_TAG.is_match(input)
}

/// Parse `html` and expand its first `<table>`.
pub fn parse_html_table(html: &str) -> Result<RawMatrix> {
    let document = Html::parse_document(html);
    let table = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .map(HtmlTable::new)
        .ok_or(InvalidTableKind::NoTableFound)?;

    let matrix = expand(&table)?;
    debug!(rows = matrix.len(), columns = matrix.width(), "expanded HTML table");
    Ok(matrix)
}

/// A `<table>` element from a parsed `scraper` document.
#[derive(Debug, Clone, Copy)]
pub struct HtmlTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlTable<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> TableElement for HtmlTable<'a> {
    type Cell = ElementRef<'a>;

    fn rows(&self) -> Vec<Vec<ElementRef<'a>>> {
        // Only rows owned by this table; nested tables stay inside their cell.
        let mut rows = Vec::new();
        for child in self.element.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "tr" => rows.push(row_cells(child)),
                "thead" | "tbody" | "tfoot" => rows.extend(
                    child
                        .children()
                        .filter_map(ElementRef::wrap)
                        .filter(|el| el.value().name() == "tr")
                        .map(row_cells),
                ),
                _ => {}
            }
        }
        rows
    }
}

fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

fn span_attr(element: &ElementRef<'_>, name: &str) -> usize {
    element
        .value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
}

impl TableCell for ElementRef<'_> {
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn colspan(&self) -> usize {
        span_attr(self, "colspan")
    }

    fn rowspan(&self) -> usize {
        span_attr(self, "rowspan")
    }
}

/// A cell held in memory, for building tables without an HTML parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanCell {
    pub text: String,
    pub colspan: usize,
    pub rowspan: usize,
}

impl SpanCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    pub fn spanning(text: impl Into<String>, colspan: usize, rowspan: usize) -> Self {
        Self {
            text: text.into(),
            colspan,
            rowspan,
        }
    }
}

impl TableCell for SpanCell {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn colspan(&self) -> usize {
        self.colspan
    }

    fn rowspan(&self) -> usize {
        self.rowspan
    }
}

impl TableElement for Vec<Vec<SpanCell>> {
    type Cell = SpanCell;

    fn rows(&self) -> Vec<Vec<SpanCell>> {
        self.clone()
    }
}
