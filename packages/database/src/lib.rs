#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! SQLite persistence for extracted incident records.
//!
//! The schema is intentionally minimal: five nullable text columns in
//! record order, no primary key, no indexes, no uniqueness. Rows are
//! inserted verbatim and the only query shipped here is the per-nature
//! count used for the summary report; richer analysis happens in
//! downstream consumers reading the table directly.

use std::fmt::Write as _;
use std::io;

use normanpd_config::{Config, Removal};
use normanpd_extract::IncidentRecord;
use rusqlite::Connection;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Preparing the database file location failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates a fresh incident database at the configured path.
///
/// Any existing database file is deleted first: each run persists one
/// report snapshot, not an accumulating history.
///
/// # Errors
///
/// Returns [`DbError`] if the resource directory cannot be prepared or
/// the database cannot be created.
pub fn create_database(config: &Config) -> Result<Connection, DbError> {
    if let Some(parent) = config.db_path.parent() {
        normanpd_config::ensure_dir(parent)?;
    }
    normanpd_config::remove_file(&config.db_path)?;

    let conn = Connection::open(&config.db_path)?;
    create_incident_table(&conn)?;

    log::info!("Created database at {}", config.db_path.display());

    Ok(conn)
}

fn create_incident_table(conn: &Connection) -> Result<(), DbError> {
    conn.execute(
        "CREATE TABLE incident_reports (
            time TEXT,
            number TEXT,
            location TEXT,
            nature TEXT,
            ori TEXT
        )",
        [],
    )?;
    Ok(())
}

/// Bulk-inserts records in one transaction and returns the row count.
///
/// Field strings are stored verbatim, empty strings included.
///
/// # Errors
///
/// Returns [`DbError::Sqlite`] if the transaction or any insert fails.
pub fn insert_records(
    conn: &mut Connection,
    records: &[IncidentRecord],
) -> Result<usize, DbError> {
    let tx = conn.transaction()?;
    {
        let mut stmt =
            tx.prepare("INSERT INTO incident_reports VALUES (?1, ?2, ?3, ?4, ?5)")?;
        for record in records {
            stmt.execute(rusqlite::params![
                record.time,
                record.number,
                record.location,
                record.nature,
                record.ori,
            ])?;
        }
    }
    tx.commit()?;

    log::info!("Inserted {} incident records", records.len());

    Ok(records.len())
}

/// Builds the nature summary: one `"<nature>|<count>"` line per distinct
/// nature, sorted ascending by nature, with a trailing newline.
///
/// # Errors
///
/// Returns [`DbError::Sqlite`] if the query fails.
pub fn summarize_by_nature(conn: &Connection) -> Result<String, DbError> {
    let mut stmt = conn.prepare(
        "SELECT nature, COUNT(*) FROM incident_reports GROUP BY nature ORDER BY nature ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut summary = String::new();
    for row in rows {
        let (nature, count) = row?;
        writeln!(summary, "{nature}|{count}").expect("writing to a String cannot fail");
    }

    Ok(summary)
}

/// Removes the configured database file.
///
/// # Errors
///
/// Returns an I/O error only when the file exists but cannot be removed;
/// an already-missing file is [`Removal::AlreadyAbsent`].
pub fn remove_database(config: &Config) -> io::Result<Removal> {
    normanpd_config::remove_file(&config.db_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: &str, number: &str, location: &str, nature: &str) -> IncidentRecord {
        IncidentRecord {
            time: time.to_owned(),
            number: number.to_owned(),
            location: location.to_owned(),
            nature: nature.to_owned(),
            ori: "OK0140100".to_owned(),
        }
    }

    fn in_memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_incident_table(&conn).unwrap();
        conn
    }

    #[test]
    fn inserts_rows_verbatim() {
        let mut conn = in_memory_db();
        let records = vec![
            record("14:32", "2024-00091", "1200 N Main St", "Disturbance"),
            record("09:15", "2024-00012", "", "Theft"),
        ];

        assert_eq!(insert_records(&mut conn, &records).unwrap(), 2);

        let (location, nature): (String, String) = conn
            .query_row(
                "SELECT location, nature FROM incident_reports WHERE number = '2024-00012'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(location, "");
        assert_eq!(nature, "Theft");
    }

    #[test]
    fn summary_groups_and_sorts_by_nature() {
        let mut conn = in_memory_db();
        let records = vec![
            record("14:32", "2024-00091", "1200 N Main St", "Disturbance"),
            record("09:15", "2024-00012", "", "Theft"),
            record("21:40", "2024-00100", "800 E Lindsey St", "Theft"),
        ];
        insert_records(&mut conn, &records).unwrap();

        assert_eq!(
            summarize_by_nature(&conn).unwrap(),
            "Disturbance|1\nTheft|2\n"
        );
    }

    #[test]
    fn empty_table_yields_empty_summary() {
        let conn = in_memory_db();
        assert_eq!(summarize_by_nature(&conn).unwrap(), "");
    }

    #[test]
    fn create_database_starts_fresh_each_run() {
        let dir = std::env::temp_dir().join(format!("normanpd-db-{}", std::process::id()));
        let config = Config::from_working_dir(&dir);

        {
            let mut conn = create_database(&config).unwrap();
            insert_records(&mut conn, &[record("14:32", "2024-00091", "", "Disturbance")])
                .unwrap();
        }

        // Recreating drops the previous snapshot.
        let conn = create_database(&config).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM incident_reports", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);

        drop(conn);
        assert_eq!(remove_database(&config).unwrap(), Removal::Removed);
        assert_eq!(remove_database(&config).unwrap(), Removal::AlreadyAbsent);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
