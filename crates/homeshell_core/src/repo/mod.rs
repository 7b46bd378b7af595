//! Repository layer over the record store.
//!
//! # Responsibility
//! - Own the canonical todo collection and its persisted encoding.
//! - Translate store failures and bad data into semantic errors.
//!
//! # Invariants
//! - Writes validate content before touching storage.
//! - Every mutation is a whole-collection read-modify-write.

pub mod todo_repo;
