//! Todo edit screen: an edit session plus the back-press intercept it owns.

use crate::nav::{BackIntercept, Navigator};
use crate::session::edit::EditSession;

#[derive(Debug)]
pub struct TodoEditScreen {
    session: EditSession,
    _intercept: BackIntercept,
}

impl TodoEditScreen {
    /// Opens a session on the `todo` param and intercepts system back
    /// presses until this screen is dropped.
    pub fn mount(nav: &Navigator) -> Self {
        Self {
            session: EditSession::open(nav.params().todo()),
            _intercept: nav.intercept_back(),
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }
}
