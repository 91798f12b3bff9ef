#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Downloads incident report PDFs into the configured staging directory.
//!
//! Report URLs carry the publication date
//! (e.g. `.../2024-01-15_daily_incident_summary.pdf`), so downloads are
//! named after that date when present, falling back to the URL's file
//! stem.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Errors that can occur while fetching a report.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Writing the download to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

static REPORT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}").expect("report date pattern compiles")
});

/// Derives a local file identifier for a report URL.
///
/// Prefers the first `YYYY-MM-DD` date appearing anywhere in the URL;
/// otherwise uses the final path segment without its extension, and
/// `"report"` if the URL has no usable segment at all.
#[must_use]
pub fn report_identifier(url: &str) -> String {
    if let Some(date) = REPORT_DATE.find(url) {
        return date.as_str().to_owned();
    }

    let last_segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let stem = last_segment
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_end_matches(".pdf");

    if stem.is_empty() {
        "report".to_owned()
    } else {
        stem.to_owned()
    }
}

/// Downloads the PDF at `url` into `temp_dir` and returns the file path.
///
/// The staging directory is created if it does not exist. The file is
/// named `<identifier>.pdf` per [`report_identifier`]; an existing file
/// with the same name is overwritten.
///
/// # Errors
///
/// Returns [`FetchError::Http`] if the request fails or the server
/// responds with a non-success status, and [`FetchError::Io`] if the
/// bytes cannot be written to disk.
pub async fn download_report(url: &str, temp_dir: &Path) -> Result<PathBuf, FetchError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {url}", bytes.len());

    normanpd_config::ensure_dir(temp_dir)?;
    let path = temp_dir.join(format!("{}.pdf", report_identifier(url)));
    tokio::fs::write(&path, &bytes).await?;

    log::info!("Saved report to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_the_date_in_the_url() {
        assert_eq!(
            report_identifier("https://example.gov/reports/2024-01-15_daily_incident_summary.pdf"),
            "2024-01-15"
        );
    }

    #[test]
    fn falls_back_to_the_file_stem() {
        assert_eq!(
            report_identifier("https://example.gov/reports/incident_summary.pdf"),
            "incident_summary"
        );
    }

    #[test]
    fn ignores_query_strings_in_the_stem() {
        assert_eq!(
            report_identifier("https://example.gov/summary.pdf?download=1"),
            "summary"
        );
    }

    #[test]
    fn empty_url_gets_a_generic_name() {
        assert_eq!(report_identifier(""), "report");
    }
}
