//! Schema initializer for the `shops`/`products` store.
//!
//! Runs on every open. Each step is written with `CREATE TABLE IF NOT EXISTS`,
//! so a store that already holds the tables but predates version tracking
//! (`user_version = 0`) is adopted as-is.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

/// Schema version written by the newest step below.
pub const LATEST_SCHEMA_VERSION: u32 = 1;

/// `(version, sql)` pairs in ascending version order.
const SCHEMA_STEPS: [(u32, &str); 1] = [(1, include_str!("0001_shops_products.sql"))];

/// Creates whichever tables are missing and records the schema version.
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the store was written by a
///   newer build.
/// - [`DbError::Sqlite`] when the store cannot be read or written.
pub fn initialize_schema(conn: &mut Connection) -> DbResult<()> {
    let stored = stored_schema_version(conn)?;
    if stored > LATEST_SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: LATEST_SCHEMA_VERSION,
        });
    }

    let mut pending = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > stored)
        .peekable();
    if pending.peek().is_none() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        debug!("event=schema_step module=db status=apply version={version}");
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;
    Ok(())
}

/// Reads `PRAGMA user_version`; zero for a fresh or untracked store.
pub fn stored_schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
