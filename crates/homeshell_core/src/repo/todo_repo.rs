//! Task repository: the todo collection persisted under one record key.
//!
//! # Responsibility
//! - Load, create, update and delete todo records.
//! - Serialize the full ordered collection as one JSON array blob.
//!
//! # Invariants
//! - New records are prepended; other records keep their relative order.
//! - No two records share an id, in memory or on disk.
//! - `updated_at` strictly increases on every update of a record.
//! - Unparseable persisted data surfaces as `StorageCorrupt`, never repaired.

use crate::clock::{Clock, SystemClock};
use crate::model::todo::{
    format_timestamp, validate_content, TaskCollection, TodoId, TodoItem, TodoValidationError,
};
use crate::store::{RecordStore, StoreError};
use chrono::Duration;
use log::{error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Fixed record key holding the serialized collection.
pub const TODOS_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Task repository error taxonomy.
#[derive(Debug)]
pub enum RepoError {
    /// Content is empty after trimming.
    Validation(TodoValidationError),
    /// `update` targeted an id that is not in the collection.
    NotFound(TodoId),
    /// Persisted blob cannot be decoded into a valid collection.
    StorageCorrupt(String),
    /// Underlying record store read/write failed.
    StorageIo(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::StorageCorrupt(message) => write!(f, "stored todo list is corrupt: {message}"),
            Self::StorageIo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::StorageIo(err) => Some(err),
            Self::NotFound(_) | Self::StorageCorrupt(_) => None,
        }
    }
}

impl From<TodoValidationError> for RepoError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::StorageIo(value)
    }
}

/// Repository interface consumed by the edit session and screens.
pub trait TodoRepository {
    fn load_all(&self) -> RepoResult<TaskCollection>;
    fn get(&self, id: &str) -> RepoResult<Option<TodoItem>>;
    fn create(&self, content: &str) -> RepoResult<TodoItem>;
    fn update(&self, id: &str, content: &str) -> RepoResult<TodoItem>;
    fn delete(&self, id: &str) -> RepoResult<()>;
}

impl<R: TodoRepository + ?Sized> TodoRepository for &R {
    fn load_all(&self) -> RepoResult<TaskCollection> {
        (**self).load_all()
    }

    fn get(&self, id: &str) -> RepoResult<Option<TodoItem>> {
        (**self).get(id)
    }

    fn create(&self, content: &str) -> RepoResult<TodoItem> {
        (**self).create(content)
    }

    fn update(&self, id: &str, content: &str) -> RepoResult<TodoItem> {
        (**self).update(id, content)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        (**self).delete(id)
    }
}

/// Repository persisting the collection through a `RecordStore`.
pub struct StoredTodoRepository<S: RecordStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: RecordStore> StoredTodoRepository<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> StoredTodoRepository<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the wrapped store, mainly for inspection in tests.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_collection(&self) -> RepoResult<TaskCollection> {
        // An empty value was never a written collection; read it as absent.
        match self.store.get(TODOS_KEY)? {
            Some(blob) if !blob.trim().is_empty() => decode_collection(&blob),
            _ => Ok(Vec::new()),
        }
    }

    fn write_collection(&self, todos: &TaskCollection) -> RepoResult<()> {
        let blob = serde_json::to_string(todos)
            .map_err(|err| RepoError::StorageCorrupt(format!("encode failed: {err}")))?;
        self.store.set(TODOS_KEY, &blob)?;
        Ok(())
    }
}

impl<S: RecordStore, C: Clock> TodoRepository for StoredTodoRepository<S, C> {
    fn load_all(&self) -> RepoResult<TaskCollection> {
        let started_at = Instant::now();
        let result = self.read_collection();
        match &result {
            Ok(todos) => info!(
                "event=todo_load module=repo status=ok count={} duration_ms={}",
                todos.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=todo_load module=repo status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn get(&self, id: &str) -> RepoResult<Option<TodoItem>> {
        Ok(self
            .read_collection()?
            .into_iter()
            .find(|todo| todo.id == id))
    }

    fn create(&self, content: &str) -> RepoResult<TodoItem> {
        validate_content(content)?;

        let mut todos = self.read_collection()?;
        let mut item = TodoItem::new(content, self.clock.now());
        while todos.iter().any(|todo| todo.id == item.id) {
            item = TodoItem::new(content, self.clock.now());
        }
        todos.insert(0, item.clone());
        self.write_collection(&todos)?;

        info!(
            "event=todo_create module=repo status=ok id={} content_len={} count={}",
            item.id,
            content.chars().count(),
            todos.len()
        );
        Ok(item)
    }

    fn update(&self, id: &str, content: &str) -> RepoResult<TodoItem> {
        validate_content(content)?;

        let mut todos = self.read_collection()?;
        let Some(item) = todos.iter_mut().find(|todo| todo.id == id) else {
            warn!("event=todo_update module=repo status=not_found id={id}");
            return Err(RepoError::NotFound(id.to_string()));
        };

        let mut now = self.clock.now();
        if let Some(previous) = item.updated_at_time() {
            if now <= previous {
                now = previous + Duration::milliseconds(1);
            }
        }
        item.content = content.to_string();
        item.updated_at = format_timestamp(now);
        let updated = item.clone();
        self.write_collection(&todos)?;

        info!(
            "event=todo_update module=repo status=ok id={} content_len={}",
            updated.id,
            content.chars().count()
        );
        Ok(updated)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut todos = self.read_collection()?;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == before {
            info!("event=todo_delete module=repo status=noop id={id}");
            return Ok(());
        }

        self.write_collection(&todos)?;
        info!(
            "event=todo_delete module=repo status=ok id={id} count={}",
            todos.len()
        );
        Ok(())
    }
}

/// Decodes a persisted blob, rejecting duplicate ids.
pub fn decode_collection(blob: &str) -> RepoResult<TaskCollection> {
    let todos: TaskCollection = serde_json::from_str(blob)
        .map_err(|err| RepoError::StorageCorrupt(err.to_string()))?;

    let mut seen = HashSet::with_capacity(todos.len());
    for todo in &todos {
        if !seen.insert(todo.id.as_str()) {
            return Err(RepoError::StorageCorrupt(format!(
                "duplicate todo id `{}`",
                todo.id
            )));
        }
    }
    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::{decode_collection, RepoError};

    #[test]
    fn decode_accepts_legacy_numeric_ids() {
        let blob = r#"[{"id":"1714552200000","content":"old","createdAt":"2024-05-01T08:30:00.000Z","updatedAt":"2024-05-01T08:30:00.000Z"}]"#;
        let todos = decode_collection(blob).unwrap();
        assert_eq!(todos[0].id, "1714552200000");
    }

    #[test]
    fn decode_rejects_non_array_blob() {
        let err = decode_collection(r#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, RepoError::StorageCorrupt(_)));
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let item = r#"{"id":"a","content":"x","createdAt":"t","updatedAt":"t"}"#;
        let err = decode_collection(&format!("[{item},{item}]")).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
