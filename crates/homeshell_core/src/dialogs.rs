//! User-facing prompt boundary.
//!
//! # Invariants
//! - `confirm` blocks the calling action until the user answers.
//! - Alerts are informational and dismissible; they never abort the process.

/// Confirmation prompts the core can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    /// Leaving the edit screen with unsaved changes.
    DiscardChanges,
    /// Removing one record from the list.
    DeleteItem,
}

impl ConfirmPrompt {
    pub fn title(self) -> &'static str {
        match self {
            Self::DiscardChanges => "Discard changes",
            Self::DeleteItem => "Confirm delete",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::DiscardChanges => "You have unsaved changes. Discard them?",
            Self::DeleteItem => "Delete this todo?",
        }
    }

    /// Label of the destructive choice; the other choice is always "Cancel".
    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::DiscardChanges => "Discard",
            Self::DeleteItem => "Delete",
        }
    }
}

/// Dismissible notice shown after a recovered error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Prompt surface implemented by the presentation layer.
pub trait Dialogs {
    /// Returns `true` when the user picked the confirm choice.
    fn confirm(&mut self, prompt: ConfirmPrompt) -> bool;
    fn alert(&mut self, alert: Alert);
}
