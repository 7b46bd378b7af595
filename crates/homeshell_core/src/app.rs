//! App shell: the single navigator plus whichever screen it currently shows.
//!
//! # Responsibility
//! - Own the process-lifetime `Navigator`, repository and dialog surface.
//! - Remount the active screen controller after every transition.
//! - Recover every screen-level error as an alert.
//!
//! # Invariants
//! - The previous controller is dropped before the next one mounts, so a
//!   back intercept never outlives its edit screen.
//! - No action here panics or returns a fatal error.

use crate::dialogs::{Alert, Dialogs};
use crate::model::todo::TodoItem;
use crate::nav::{BackPress, Navigator, Screen};
use crate::repo::todo_repo::TodoRepository;
use crate::screens::{HomeScreen, TodoEditScreen, TodoListScreen};
use crate::session::edit::{EditError, EditSession, ExitDecision};
use log::info;

/// Controller for the active screen.
#[derive(Debug)]
pub enum ActiveScreen {
    Home(HomeScreen),
    /// Rendered by the external weather module.
    Weather,
    TodoList(TodoListScreen),
    TodoEdit(TodoEditScreen),
}

pub struct AppShell<R: TodoRepository, D: Dialogs> {
    navigator: Navigator,
    repo: R,
    dialogs: D,
    active: ActiveScreen,
    mounted_revision: u64,
}

impl<R: TodoRepository, D: Dialogs> AppShell<R, D> {
    /// Starts on the home screen.
    pub fn new(repo: R, dialogs: D) -> Self {
        info!("event=shell_start module=app status=ok");
        let navigator = Navigator::new();
        let mounted_revision = navigator.revision();
        Self {
            navigator,
            repo,
            dialogs,
            active: ActiveScreen::Home(HomeScreen::new()),
            mounted_revision,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn active_screen(&self) -> &Screen {
        self.navigator.active()
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn list(&self) -> Option<&TodoListScreen> {
        match &self.active {
            ActiveScreen::TodoList(list) => Some(list),
            _ => None,
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match &self.active {
            ActiveScreen::TodoEdit(edit) => Some(edit.session()),
            _ => None,
        }
    }

    /// Home menu tap. Ignored unless the home menu is showing.
    pub fn open_feature(&mut self, feature_id: &str) -> bool {
        let opened = match &self.active {
            ActiveScreen::Home(home) => home.open(feature_id, &mut self.navigator),
            _ => false,
        };
        self.sync();
        opened
    }

    /// Header back button.
    pub fn back(&mut self) {
        self.leave_current();
        self.sync();
    }

    /// System back button; routed through the edit session while it
    /// intercepts.
    pub fn hardware_back(&mut self) {
        if self.navigator.hardware_back() == BackPress::Intercepted {
            self.leave_current();
        }
        self.sync();
    }

    pub fn list_add(&mut self) -> bool {
        let added = match &self.active {
            ActiveScreen::TodoList(list) => {
                list.add(&mut self.navigator);
                true
            }
            _ => false,
        };
        self.sync();
        added
    }

    pub fn list_select(&mut self, index: usize) -> bool {
        let selected = match &self.active {
            ActiveScreen::TodoList(list) => list.select(index, &mut self.navigator),
            _ => false,
        };
        self.sync();
        selected
    }

    pub fn list_delete(&mut self, id: &str) -> bool {
        match &mut self.active {
            ActiveScreen::TodoList(list) => list.delete(id, &self.repo, &mut self.dialogs),
            _ => false,
        }
    }

    pub fn edit_set_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.active {
            ActiveScreen::TodoEdit(edit) => {
                edit.session_mut().set_draft(text);
                true
            }
            _ => false,
        }
    }

    /// Save control. On success returns to the list; on failure alerts and
    /// keeps the session open.
    pub fn edit_save(&mut self) -> Option<TodoItem> {
        let ActiveScreen::TodoEdit(edit) = &mut self.active else {
            return None;
        };
        match edit.session_mut().save(&self.repo) {
            Ok(saved) => {
                self.navigator.go_back();
                self.sync();
                Some(saved)
            }
            Err(EditError::SaveDisabled) => None,
            Err(EditError::Validation(_)) => {
                self.dialogs
                    .alert(Alert::new("Notice", "Content cannot be empty"));
                None
            }
            Err(EditError::Repo(_)) => {
                self.dialogs
                    .alert(Alert::new("Error", "Save failed, please try again"));
                None
            }
        }
    }

    fn leave_current(&mut self) {
        if let ActiveScreen::TodoEdit(edit) = &self.active {
            if edit.session().request_exit(&mut self.dialogs) == ExitDecision::Stay {
                return;
            }
        }
        self.navigator.go_back();
    }

    /// Remounts the controller when the navigator moved.
    fn sync(&mut self) {
        if self.navigator.revision() == self.mounted_revision {
            return;
        }
        let screen = self.navigator.active().clone();
        self.active = ActiveScreen::Home(HomeScreen::new());
        self.active = match screen {
            Screen::Home | Screen::Other(_) => ActiveScreen::Home(HomeScreen::new()),
            Screen::Weather => ActiveScreen::Weather,
            Screen::Todo => ActiveScreen::TodoList(TodoListScreen::mount(
                &mut self.navigator,
                &self.repo,
                &mut self.dialogs,
            )),
            Screen::TodoEdit => ActiveScreen::TodoEdit(TodoEditScreen::mount(&self.navigator)),
        };
        self.mounted_revision = self.navigator.revision();
    }
}
