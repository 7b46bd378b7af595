//! Screen controllers driven by the app shell.
//!
//! # Responsibility
//! - Hold per-screen view state (list cache, edit session).
//! - Translate user actions into navigator and repository calls.
//!
//! # Invariants
//! - Controllers never write `ScreenState`; they call `navigate`/`go_back`.
//! - A controller lives exactly as long as its screen is mounted.

pub mod home;
pub mod todo_edit;
pub mod todo_list;

pub use home::{Feature, HomeScreen, FEATURES};
pub use todo_edit::TodoEditScreen;
pub use todo_list::TodoListScreen;
