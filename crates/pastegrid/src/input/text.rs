//! Plain-text paste splitting with delimiter detection.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::source::{Delimiter, RawMatrix};
use crate::error::Result;

// Split patterns, compiled once, in `Delimiter::PRIORITY` order.
static SPLITTERS: Lazy<Vec<(Delimiter, Regex)>> = Lazy::new(|| {
    Delimiter::PRIORITY
        .iter()
        .map(|d| (*d, Regex::new(d.pattern()).unwrap()))
        .collect()
});

/// A plain-text paste split by the delimiter that explains it best.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedMatrix {
    pub delimiter: Delimiter,
    pub matrix: RawMatrix,
}

/// How well one delimiter splits the paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitScore {
    /// Split lines with the same column count as the first split line.
    pub consistency: usize,
    /// Lines split into more than one column.
    pub coverage: usize,
    /// Position in the priority list.
    pub priority: usize,
}

impl SplitScore {
    /// Every line split, all into the same number of columns.
    fn is_decisive(&self, total_lines: usize) -> bool {
        self.coverage > 0 && self.coverage == total_lines && self.consistency == total_lines
    }
}

/// Split `text` into a rectangular matrix, choosing the delimiter.
///
/// Fails with `TooLarge` when padding the winning split would exceed
/// [`MAX_CELLS`](super::MAX_CELLS).
pub fn detect(text: &str) -> Result<DetectedMatrix> {
    let lines = split_lines(text);
    let total = lines.len();

    let mut candidates: Vec<(SplitScore, Delimiter, Vec<Vec<String>>)> =
        Vec::with_capacity(SPLITTERS.len());

    for (priority, (delimiter, regex)) in SPLITTERS.iter().enumerate() {
        let rows: Vec<Vec<String>> = lines
            .iter()
            .map(|line| regex.split(line).map(str::to_string).collect())
            .collect();
        let score = score_split(&rows, priority);
        trace!(
            ?delimiter,
            consistency = score.consistency,
            coverage = score.coverage,
            "scored delimiter"
        );

        if score.is_decisive(total) {
            debug!(?delimiter, lines = total, "delimiter accepted early");
            return finish(*delimiter, rows);
        }
        candidates.push((score, *delimiter, rows));
    }

    candidates.sort_by(|(a, ..), (b, ..)| {
        b.consistency
            .cmp(&a.consistency)
            .then(b.coverage.cmp(&a.coverage))
            .then(a.priority.cmp(&b.priority))
    });

    // SPLITTERS is never empty, so there is always a best candidate.
    let (score, delimiter, rows) = candidates.swap_remove(0);
    debug!(
        ?delimiter,
        consistency = score.consistency,
        coverage = score.coverage,
        lines = total,
        "delimiter chosen by ranking"
    );
    finish(delimiter, rows)
}

/// Like [`detect`], discarding which delimiter won.
pub fn detect_matrix(text: &str) -> Result<RawMatrix> {
    detect(text).map(|detected| detected.matrix)
}

/// Score an already split paste.
pub fn score_split(rows: &[Vec<String>], priority: usize) -> SplitScore {
    let mut split_counts = rows.iter().map(Vec::len).filter(|&cols| cols > 1);
    let consistency = match split_counts.next() {
        Some(first) => 1 + split_counts.filter(|&cols| cols == first).count(),
        None => 0,
    };

    SplitScore {
        consistency,
        coverage: rows.iter().filter(|row| row.len() > 1).count(),
        priority,
    }
}

/// Lines of the paste without surrounding blank lines.
///
/// Only line breaks are stripped from the ends so that a blank leading
/// header cell survives.
fn split_lines(text: &str) -> Vec<&str> {
    text.trim_matches(|c| c == '\n' || c == '\r')
        .lines()
        .collect()
}

fn finish(delimiter: Delimiter, rows: Vec<Vec<String>>) -> Result<DetectedMatrix> {
    let mut matrix = RawMatrix::new(rows);
    RawMatrix::check_capacity(matrix.len(), matrix.width())?;
    matrix.pad();
    // Blank lines inside the paste are layout, not records.
    matrix.drop_blank_data_rows();
    Ok(DetectedMatrix { delimiter, matrix })
}
