//! Edit session for one todo record (new or existing).
//!
//! # Responsibility
//! - Track draft vs. baseline content and the derived dirty state.
//! - Gate exits behind a discard confirmation when dirty.
//! - Commit through `TodoRepository::create` or `update`.
//!
//! # Invariants
//! - `is_dirty() == (draft != baseline)` after every draft change.
//! - `save` is refused while the session is clean.
//! - A failed save leaves the session open with the draft intact.

use crate::dialogs::{ConfirmPrompt, Dialogs};
use crate::model::todo::{validate_content, TodoId, TodoItem, TodoValidationError};
use crate::repo::todo_repo::{RepoError, TodoRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session state. `Saving` only exists while a repository write is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Clean,
    Dirty,
    Saving,
}

/// Result of asking to leave the edit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Leave now; nothing is written.
    Leave,
    /// User cancelled the discard prompt; keep editing.
    Stay,
}

#[derive(Debug)]
pub enum EditError {
    /// Save control is disabled because nothing changed.
    SaveDisabled,
    Validation(TodoValidationError),
    Repo(RepoError),
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SaveDisabled => write!(f, "nothing to save"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "save failed: {err}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SaveDisabled => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TodoValidationError> for EditError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for EditError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditSession {
    target: Option<TodoItem>,
    draft: String,
    baseline: String,
    state: EditState,
}

impl EditSession {
    /// Opens a session on `item`, or on a new record when `None`.
    pub fn open(item: Option<TodoItem>) -> Self {
        let baseline = item
            .as_ref()
            .map(|todo| todo.content.clone())
            .unwrap_or_default();
        info!(
            "event=edit_open module=session mode={}",
            if item.is_some() { "update" } else { "create" }
        );
        Self {
            target: item,
            draft: baseline.clone(),
            baseline,
            state: EditState::Clean,
        }
    }

    pub fn target_id(&self) -> Option<&TodoId> {
        self.target.as_ref().map(|todo| &todo.id)
    }

    pub fn is_new(&self) -> bool {
        self.target.is_none()
    }

    pub fn title(&self) -> &'static str {
        if self.is_new() {
            "New Todo"
        } else {
            "Edit Todo"
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    /// Whether the save control is enabled.
    pub fn can_save(&self) -> bool {
        self.state == EditState::Dirty
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.state = if self.is_dirty() {
            EditState::Dirty
        } else {
            EditState::Clean
        };
    }

    /// Back button handling. Dirty sessions ask before discarding.
    pub fn request_exit(&self, dialogs: &mut dyn Dialogs) -> ExitDecision {
        if !self.is_dirty() {
            return ExitDecision::Leave;
        }
        if dialogs.confirm(ConfirmPrompt::DiscardChanges) {
            info!("event=edit_discard module=session status=ok");
            ExitDecision::Leave
        } else {
            ExitDecision::Stay
        }
    }

    /// Commits the draft. On success the caller ends the session and leaves.
    pub fn save<R: TodoRepository + ?Sized>(&mut self, repo: &R) -> Result<TodoItem, EditError> {
        if !self.can_save() {
            return Err(EditError::SaveDisabled);
        }
        validate_content(&self.draft)?;

        self.state = EditState::Saving;
        let result = match &self.target {
            Some(todo) => repo.update(&todo.id, &self.draft),
            None => repo.create(&self.draft),
        };

        match result {
            Ok(saved) => {
                self.baseline = saved.content.clone();
                self.target = Some(saved.clone());
                self.state = EditState::Clean;
                Ok(saved)
            }
            Err(err) => {
                warn!("event=edit_save module=session status=error error={err}");
                self.state = EditState::Dirty;
                Err(err.into())
            }
        }
    }
}
