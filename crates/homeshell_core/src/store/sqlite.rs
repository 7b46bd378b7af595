//! SQLite-backed record store.
//!
//! # Invariants
//! - One row per key; `set` is a single upsert statement, so a failed write
//!   leaves the previous blob intact.

use super::{RecordStore, StoreResult};
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};

/// Record store over the `records` table of an opened record database.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .inspect_err(|err| {
                error!("event=record_get module=store status=error key={key} error={err}");
            })?;

        debug!(
            "event=record_get module=store status=ok key={key} found={} bytes={}",
            value.is_some(),
            value.as_ref().map_or(0, String::len)
        );
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn
            .execute(
                "INSERT INTO records (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%s', 'now') * 1000)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at;",
                params![key, value],
            )
            .inspect_err(|err| {
                error!("event=record_set module=store status=error key={key} error={err}");
            })?;

        debug!(
            "event=record_set module=store status=ok key={key} bytes={}",
            value.len()
        );
        Ok(())
    }
}
