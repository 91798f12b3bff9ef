#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record extraction from Norman PD daily incident summary PDFs.
//!
//! The department publishes incidents as a semi-structured tabular PDF:
//! five columns (time, case number, location, nature, agency ORI)
//! rendered with whitespace-aligned layout, interleaved with page headers
//! and footers, and with the location column occasionally missing.
//!
//! Extraction runs pure-Rust text extraction ([`pdf_extract`]) in its
//! layout-preserving mode, then per line: split columns on wide
//! whitespace runs ([`columns`]), keep only rows that lead with a numeric
//! time token ([`rows::is_incident_row`]), and pad short rows back to the
//! fixed five-field shape ([`rows::normalize_fields`]). The result is an
//! ordered `Vec<IncidentRecord>` in page-then-line order.

pub mod columns;
pub mod rows;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors that can occur while extracting records from a document.
///
/// Per-line irregularities (headers, short rows, noise) are handled by
/// the classifier and normalizer and never surface here; only
/// whole-document failures do.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The bytes could not be opened or parsed as a PDF.
    #[error("PDF extraction error: {0}")]
    Parse(String),

    /// The document parsed but contained no page text at all.
    #[error("document contains no extractable text")]
    EmptyDocument,

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One incident row from a report, in column order.
///
/// Every field is a string and may be empty (the normalizer backfills a
/// missing location with `""`). Field order matches the persisted
/// `incident_reports` table: time, number, location, nature, ori.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Time of day the incident was reported (e.g. `"14:32"`).
    pub time: String,
    /// Case number (e.g. `"2024-00091"`).
    pub number: String,
    /// Street address or block; empty when the report omits it.
    pub location: String,
    /// Nature of the incident (e.g. `"Disturbance"`).
    pub nature: String,
    /// ORI code of the reporting agency (e.g. `"OK0140100"`).
    pub ori: String,
}

impl IncidentRecord {
    fn from_normalized(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            time: fields.next().unwrap_or_default(),
            number: fields.next().unwrap_or_default(),
            location: fields.next().unwrap_or_default(),
            nature: fields.next().unwrap_or_default(),
            ori: fields.next().unwrap_or_default(),
        }
    }
}

/// Extracts incident records from one page's layout-preserving text.
///
/// Lines are processed in order; non-qualifying lines contribute nothing.
/// Total function: any text input is valid, including empty.
#[must_use]
pub fn records_from_text(text: &str) -> Vec<IncidentRecord> {
    text.lines()
        .map(columns::tokenize_line)
        .filter(|fields| rows::is_incident_row(fields))
        .map(rows::normalize_fields)
        .map(IncidentRecord::from_normalized)
        .collect()
}

/// Extracts incident records from pages in document order.
///
/// The output is page 1's records followed by page 2's and so on, each
/// page's internal line order preserved. A page with no qualifying lines
/// contributes zero records without affecting its neighbours.
#[must_use]
pub fn records_from_pages<'a>(
    pages: impl IntoIterator<Item = &'a str>,
) -> Vec<IncidentRecord> {
    pages.into_iter().flat_map(records_from_text).collect()
}

/// Extracts incident records from a PDF file on disk.
///
/// # Errors
///
/// Returns [`ExtractError::Parse`] if the file is not a readable PDF and
/// [`ExtractError::EmptyDocument`] if it yields no page text (e.g. a
/// zero-page document). A document that parses but contains no incident
/// rows is `Ok` with an empty vec.
pub fn extract_file(path: &Path) -> Result<Vec<IncidentRecord>, ExtractError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| ExtractError::Parse(format!("failed to extract text from PDF: {e}")))?;
    records_from_document_text(&text)
}

/// Extracts incident records from in-memory PDF bytes.
///
/// # Errors
///
/// Same failure modes as [`extract_file`].
pub fn extract_bytes(bytes: &[u8]) -> Result<Vec<IncidentRecord>, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Parse(format!("failed to extract text from PDF: {e}")))?;
    records_from_document_text(&text)
}

fn records_from_document_text(text: &str) -> Result<Vec<IncidentRecord>, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    log::debug!("Extracted {} characters of layout text", text.len());

    // pdf-extract separates pages with form feeds; a single-page dump
    // without them is one page.
    let records = records_from_pages(text.split('\u{c}'));

    log::info!("Extracted {} incident records", records.len());

    Ok(records)
}
