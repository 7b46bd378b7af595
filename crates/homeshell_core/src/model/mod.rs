//! Domain model for the todo feature.
//!
//! # Responsibility
//! - Define the persisted record shape shared by repository, edit session
//!   and screens.
//!
//! # Invariants
//! - Every record is identified by an opaque, immutable string id.
//! - A saved record never carries blank content.

pub mod todo;
