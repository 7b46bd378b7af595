//! Transient editing state layered over the task repository.
//!
//! # Invariants
//! - At most one edit session is active; it is never persisted.
//! - A session never mutates the collection directly; it hands a save
//!   request to the repository.

pub mod edit;
