//! Whitespace-run column splitting for layout-preserving PDF text.
//!
//! The incident summaries render table columns as runs of spaces rather
//! than explicit delimiters, so a line is split at every maximal run of
//! [`COLUMN_GAP_THRESHOLD`]-or-more whitespace characters. Shorter runs
//! are treated as word spacing inside a single field (e.g. street
//! addresses like `1200 N Main St`).

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length of a whitespace run that separates two columns.
///
/// This threshold is the column-boundary model for the supported report
/// layout: intra-field word spacing is 1–3 spaces, inter-column gaps are
/// wider. Report-format variants with different gap widths can use
/// [`Tokenizer::new`] instead of changing this constant.
pub const COLUMN_GAP_THRESHOLD: usize = 4;

static COLUMN_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&gap_pattern(COLUMN_GAP_THRESHOLD)).expect("default column gap pattern compiles")
});

fn gap_pattern(threshold: usize) -> String {
    format!(r"\s{{{threshold},}}")
}

/// Splits one physical line into trimmed, non-empty column fields.
///
/// Uses the default [`COLUMN_GAP_THRESHOLD`]. Total over all inputs: an
/// empty or all-whitespace line yields an empty vec, and the output never
/// contains an empty string.
#[must_use]
pub fn tokenize_line(line: &str) -> Vec<String> {
    split_fields(&COLUMN_GAP, line)
}

/// A line splitter with a configurable column gap threshold.
///
/// Compiles the gap regex once so per-line tokenization stays cheap.
#[derive(Debug)]
pub struct Tokenizer {
    column_gap: Regex,
}

impl Tokenizer {
    /// Creates a tokenizer that splits at runs of `column_gap_threshold`
    /// or more whitespace characters.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the gap pattern fails to compile.
    pub fn new(column_gap_threshold: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            column_gap: Regex::new(&gap_pattern(column_gap_threshold))?,
        })
    }

    /// Splits one physical line into trimmed, non-empty column fields.
    #[must_use]
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        split_fields(&self.column_gap, line)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            column_gap: COLUMN_GAP.clone(),
        }
    }
}

fn split_fields(column_gap: &Regex, line: &str) -> Vec<String> {
    column_gap
        .split(line.trim())
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
        .collect()
}
