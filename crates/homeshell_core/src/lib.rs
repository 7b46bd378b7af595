//! Core logic for the HomeShell app: screen orchestration and the local todo
//! store with its edit workflow.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod clock;
pub mod db;
pub mod dialogs;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod screens;
pub mod session;
pub mod store;

pub use app::{ActiveScreen, AppShell};
pub use clock::{Clock, SystemClock};
pub use dialogs::{Alert, ConfirmPrompt, Dialogs};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{TaskCollection, TodoId, TodoItem, TodoValidationError};
pub use nav::{
    back_target, BackIntercept, BackPress, NavigationEvent, Navigator, Screen, ScreenParams,
    ScreenState, Subscription,
};
pub use repo::todo_repo::{RepoError, RepoResult, StoredTodoRepository, TodoRepository, TODOS_KEY};
pub use session::edit::{EditError, EditSession, EditState, ExitDecision};
pub use store::{MemoryRecordStore, RecordStore, SqliteRecordStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
