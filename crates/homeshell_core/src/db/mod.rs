//! Record database: the SQLite file behind `SqliteRecordStore`.
//!
//! # Responsibility
//! - Hand out connections whose `records` table is ready for get/set.
//! - Refuse files written by a newer build instead of guessing at their
//!   layout.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - The record store only ever sees fully migrated connections.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the record database.
#[derive(Debug)]
pub enum DbError {
    /// Driver-level failure (open, pragma, migration statement).
    Sqlite(rusqlite::Error),
    /// The file was migrated by a newer build; its `records` layout is unknown.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "record database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "record database was written by a newer build (schema {db_version}, this build reads up to {latest_supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
