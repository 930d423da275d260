//! Connection bootstrap utilities for SQLite.
//!
//! Returned connections have `foreign_keys=ON`, a busy timeout, and migrations fully applied.

use super::migrations::apply_migrations;
use super::DbResult;
use crate::constants::BUSY_TIMEOUT_SECS;
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and applies all pending migrations.
///
/// The file is created if it does not exist yet.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    tracing::debug!(mode = "file", path = %path.display(), "db_open start");

    let conn = Connection::open(path).map_err(|err| {
        tracing::error!(
            mode = "file",
            duration_ms = started_at.elapsed().as_millis() as u64,
            error = %err,
            "db_open failed"
        );
        err
    })?;

    finish_open(conn, "file", started_at)
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    tracing::debug!(mode = "memory", "db_open start");

    let conn = Connection::open_in_memory()?;
    finish_open(conn, "memory", started_at)
}

fn finish_open(mut conn: Connection, mode: &str, started_at: Instant) -> DbResult<Connection> {
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            tracing::info!(
                mode,
                duration_ms = started_at.elapsed().as_millis() as u64,
                "db_open ok"
            );
            Ok(conn)
        }
        Err(err) => {
            tracing::error!(
                mode,
                duration_ms = started_at.elapsed().as_millis() as u64,
                error = %err,
                "db_open bootstrap failed"
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS))?;
    apply_migrations(conn)?;
    Ok(())
}
