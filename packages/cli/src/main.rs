#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the incident report pipeline.
//!
//! Downloads a daily incident summary PDF, extracts its records,
//! persists them to a fresh SQLite database, prints the per-nature
//! summary to stdout, and cleans up the downloaded file.

use std::path::PathBuf;

use clap::Parser;
use normanpd_config::{Config, Removal};

#[derive(Parser)]
#[command(name = "normanpd_cli", about = "Generate a report from a given PDF URL")]
struct Cli {
    /// PDF URL containing incidents data
    #[arg(long)]
    incidents: String,

    /// Directory the resources/ and temporary/ folders live under
    /// (defaults to the current directory)
    #[arg(long)]
    working_dir: Option<PathBuf>,

    /// Keep the downloaded PDF instead of deleting it after the run
    #[arg(long)]
    keep_pdf: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let working_dir = match cli.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = Config::from_working_dir(working_dir);

    let pdf_path = normanpd_fetch::download_report(&cli.incidents, &config.temp_dir).await?;

    let records = normanpd_extract::extract_file(&pdf_path)?;
    if records.is_empty() {
        log::warn!("No incident records found in {}", pdf_path.display());
        cleanup(&pdf_path, cli.keep_pdf);
        return Ok(());
    }

    let mut conn = normanpd_database::create_database(&config)?;
    normanpd_database::insert_records(&mut conn, &records)?;

    print!("{}", normanpd_database::summarize_by_nature(&conn)?);

    cleanup(&pdf_path, cli.keep_pdf);

    Ok(())
}

/// Removes the staged PDF unless the user asked to keep it. Cleanup
/// failure is logged, not fatal: the summary already printed.
fn cleanup(pdf_path: &std::path::Path, keep_pdf: bool) {
    if keep_pdf {
        return;
    }
    match normanpd_config::remove_file(pdf_path) {
        Ok(Removal::Removed) => {}
        Ok(Removal::AlreadyAbsent) => {
            log::warn!("Download {} was already gone", pdf_path.display());
        }
        Err(e) => log::error!("Failed to remove {}: {e}", pdf_path.display()),
    }
}
