//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose todo list/get/create/update/delete and routing lookups to Dart.
//! - Flatten core errors into message strings for UI alerts.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call opens the record database at the configured path, so no
//!   connection state survives between calls.

use homeshell_core::db::open_db;
use homeshell_core::{
    back_target, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, RepoError, RepoResult, Screen, SqliteRecordStore, StoredTodoRepository,
    TodoItem, TodoRepository,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_PATH_ENV: &str = "HOMESHELL_DB_PATH";
const DB_FILE_NAME: &str = "homeshell.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Todo record as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TodoItem> for TodoView {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            content: item.content,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Error category so Dart can pick an alert style without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoErrorKind {
    Validation,
    NotFound,
    StorageCorrupt,
    StorageIo,
}

/// Response envelope for list calls. A failed load yields an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub items: Vec<TodoView>,
    pub error_kind: Option<TodoErrorKind>,
    pub message: String,
}

/// Response envelope for single-record mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    pub ok: bool,
    pub item: Option<TodoView>,
    pub error_kind: Option<TodoErrorKind>,
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, item: Option<TodoItem>) -> Self {
        Self {
            ok: true,
            item: item.map(TodoView::from),
            error_kind: None,
            message: message.into(),
        }
    }

    fn failure(op: &str, err: &RepoError) -> Self {
        Self {
            ok: false,
            item: None,
            error_kind: Some(error_kind(err)),
            message: format!("{op} failed: {err}"),
        }
    }
}

/// Loads the whole todo list, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_repo(|repo| repo.load_all()) {
        Ok(items) => TodoListResponse {
            message: format!("Loaded {} todo(s).", items.len()),
            items: items.into_iter().map(TodoView::from).collect(),
            error_kind: None,
        },
        Err(err) => TodoListResponse {
            items: Vec::new(),
            error_kind: Some(error_kind(&err)),
            message: format!("todo_list failed: {err}"),
        },
    }
}

/// Resolves one record, e.g. when the edit screen reopens by id.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_get(id: String) -> TodoActionResponse {
    match with_repo(|repo| repo.get(&id)) {
        Ok(Some(item)) => TodoActionResponse::success("Todo loaded.", Some(item)),
        Ok(None) => TodoActionResponse::failure("todo_get", &RepoError::NotFound(id)),
        Err(err) => TodoActionResponse::failure("todo_get", &err),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_create(content: String) -> TodoActionResponse {
    match with_repo(|repo| repo.create(&content)) {
        Ok(item) => TodoActionResponse::success("Todo created.", Some(item)),
        Err(err) => TodoActionResponse::failure("todo_create", &err),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_update(id: String, content: String) -> TodoActionResponse {
    match with_repo(|repo| repo.update(&id, &content)) {
        Ok(item) => TodoActionResponse::success("Todo updated.", Some(item)),
        Err(err) => TodoActionResponse::failure("todo_update", &err),
    }
}

/// Deletes by id; deleting an unknown id succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> TodoActionResponse {
    match with_repo(|repo| repo.delete(&id)) {
        Ok(()) => TodoActionResponse::success("Todo deleted.", None),
        Err(err) => TodoActionResponse::failure("todo_delete", &err),
    }
}

/// Screen that a back action from `screen` leads to.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_back_target(screen: String) -> String {
    back_target(&Screen::parse(&screen)).as_str().to_owned()
}

fn error_kind(err: &RepoError) -> TodoErrorKind {
    match err {
        RepoError::Validation(_) => TodoErrorKind::Validation,
        RepoError::NotFound(_) => TodoErrorKind::NotFound,
        RepoError::StorageCorrupt(_) => TodoErrorKind::StorageCorrupt,
        RepoError::StorageIo(_) => TodoErrorKind::StorageIo,
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_repo<T>(
    f: impl FnOnce(&StoredTodoRepository<SqliteRecordStore<'_>>) -> RepoResult<T>,
) -> RepoResult<T> {
    let conn = open_db(resolve_db_path()).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        RepoError::StorageIo(err.into())
    })?;
    let repo = StoredTodoRepository::new(SqliteRecordStore::new(&conn));
    f(&repo)
}
