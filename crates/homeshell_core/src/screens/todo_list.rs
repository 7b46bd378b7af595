//! Todo list screen.
//!
//! # Invariants
//! - The local item list is a cache of the repository; it is reloaded on
//!   every focus dispatch.
//! - A failed load leaves an empty list and a notice.
//! - Deletion updates the cache in place without re-fetching.

use crate::dialogs::{Alert, ConfirmPrompt, Dialogs};
use crate::model::todo::TodoItem;
use crate::nav::{NavigationEvent, Navigator, Screen, ScreenParams, Subscription};
use crate::repo::todo_repo::TodoRepository;
use log::{error, info};

const LOAD_FAILED_NOTICE: &str = "Failed to load the todo list";

#[derive(Debug)]
pub struct TodoListScreen {
    items: Vec<TodoItem>,
    loading: bool,
    notice: Option<String>,
    focus: Option<Subscription>,
}

impl TodoListScreen {
    /// Mounts the screen and loads through its focus listener.
    pub fn mount<R: TodoRepository + ?Sized>(
        nav: &mut Navigator,
        repo: &R,
        dialogs: &mut dyn Dialogs,
    ) -> Self {
        let mut screen = Self {
            items: Vec::new(),
            loading: true,
            notice: None,
            focus: None,
        };
        let subscription =
            nav.add_listener(NavigationEvent::Focus, || screen.reload(repo, dialogs));
        screen.focus = Some(subscription);
        screen
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Replaces the cache with the repository contents.
    pub fn reload<R: TodoRepository + ?Sized>(&mut self, repo: &R, dialogs: &mut dyn Dialogs) {
        self.loading = true;
        match repo.load_all() {
            Ok(items) => {
                self.items = items;
                self.notice = None;
            }
            Err(err) => {
                error!("event=list_load module=screens status=error error={err}");
                self.items.clear();
                self.notice = Some(LOAD_FAILED_NOTICE.to_string());
                dialogs.alert(Alert::new("Error", LOAD_FAILED_NOTICE));
            }
        }
        self.loading = false;
    }

    /// Asks for confirmation, then deletes. Returns `true` when removed.
    pub fn delete<R: TodoRepository + ?Sized>(
        &mut self,
        id: &str,
        repo: &R,
        dialogs: &mut dyn Dialogs,
    ) -> bool {
        if !dialogs.confirm(ConfirmPrompt::DeleteItem) {
            return false;
        }
        match repo.delete(id) {
            Ok(()) => {
                self.items.retain(|todo| todo.id != id);
                info!("event=list_delete module=screens status=ok id={id}");
                true
            }
            Err(err) => {
                error!("event=list_delete module=screens status=error id={id} error={err}");
                dialogs.alert(Alert::new("Error", "Failed to delete the todo"));
                false
            }
        }
    }

    /// Opens the edit screen on the item at `index`.
    pub fn select(&self, index: usize, nav: &mut Navigator) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        nav.navigate(Screen::TodoEdit, ScreenParams::with_todo(Some(item)));
        true
    }

    /// Opens the edit screen on a new record.
    pub fn add(&self, nav: &mut Navigator) {
        nav.navigate(Screen::TodoEdit, ScreenParams::with_todo(None));
    }

    pub fn back(&self, nav: &mut Navigator) {
        nav.go_back();
    }
}

impl Drop for TodoListScreen {
    fn drop(&mut self) {
        if let Some(subscription) = self.focus.take() {
            subscription.unsubscribe();
        }
    }
}
