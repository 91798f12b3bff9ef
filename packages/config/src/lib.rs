#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Explicit path configuration for the normanpd pipeline.
//!
//! Every component that touches the filesystem takes a [`Config`] (or a
//! path from one) rather than resolving locations against the process's
//! current working directory, so tests and callers can point the whole
//! pipeline at any directory.

use std::io;
use std::path::{Path, PathBuf};

/// Filesystem locations used by the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory all other paths default under.
    pub working_dir: PathBuf,
    /// SQLite database file for extracted records.
    pub db_path: PathBuf,
    /// Directory where downloaded report PDFs are staged.
    pub temp_dir: PathBuf,
}

impl Config {
    /// Creates a config rooted at `working_dir`, with the database at
    /// `resources/normanpd.db` and downloads staged under `temporary/`.
    #[must_use]
    pub fn from_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        Self {
            db_path: working_dir.join("resources").join("normanpd.db"),
            temp_dir: working_dir.join("temporary"),
            working_dir,
        }
    }

    /// Overrides the database file location.
    #[must_use]
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

/// Outcome of a file removal attempt.
///
/// A missing file is an expected outcome during cleanup (the download may
/// already have been removed), distinct from a file that exists but
/// cannot be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The file existed and was deleted.
    Removed,
    /// There was nothing to delete.
    AlreadyAbsent,
}

/// Removes a file, treating "not found" as [`Removal::AlreadyAbsent`].
///
/// # Errors
///
/// Returns an I/O error only when the file exists but cannot be removed
/// (permissions, open handles on some platforms, etc.).
pub fn remove_file(path: &Path) -> io::Result<Removal> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            log::debug!("Removed {}", path.display());
            Ok(Removal::Removed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::AlreadyAbsent),
        Err(e) => Err(e),
    }
}

/// Ensures a directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
