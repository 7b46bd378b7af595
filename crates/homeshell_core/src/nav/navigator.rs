use super::{Screen, ScreenParams};
use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;

/// What is rendered right now.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub active: Screen,
    pub params: ScreenParams,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            active: Screen::Home,
            params: ScreenParams::new(),
        }
    }
}

/// Listener event names accepted by `Navigator::add_listener`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Focus,
    /// Accepted and ignored.
    Other(String),
}

impl NavigationEvent {
    pub fn parse(value: &str) -> Self {
        match value {
            "focus" => Self::Focus,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Handle returned by `add_listener`. Listeners are never retained, so
/// unsubscribing has nothing to release.
#[derive(Debug, Default)]
#[must_use = "keep the subscription for the lifetime of the screen"]
pub struct Subscription {
    _private: (),
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

/// Outcome of a system back press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackPress {
    /// A screen holds an intercept; it must decide what happens.
    Intercepted,
    /// Default back behavior ran and this screen is now active.
    Navigated(Screen),
}

/// Scoped back-press intercept. Released on drop.
#[derive(Debug)]
#[must_use = "the intercept is released as soon as it is dropped"]
pub struct BackIntercept {
    active: Rc<Cell<usize>>,
}

impl Drop for BackIntercept {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        debug!(
            "event=back_intercept module=nav status=released active={}",
            self.active.get()
        );
    }
}

/// Destination of `go_back` from `screen`. Flat two-level routing: the edit
/// screen returns to the list, everything else returns home.
pub fn back_target(screen: &Screen) -> Screen {
    match screen {
        Screen::TodoEdit => Screen::Todo,
        Screen::Home | Screen::Weather | Screen::Todo | Screen::Other(_) => Screen::Home,
    }
}

/// Single-state screen orchestrator.
#[derive(Debug, Default)]
pub struct Navigator {
    state: ScreenState,
    revision: u64,
    intercepts: Rc<Cell<usize>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn active(&self) -> &Screen {
        &self.state.active
    }

    pub fn params(&self) -> &ScreenParams {
        &self.state.params
    }

    /// Increments on every transition; renderers remount when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Unconditional transition. Any screen identifier is accepted.
    pub fn navigate(&mut self, screen: Screen, params: ScreenParams) {
        info!(
            "event=navigate module=nav from={} to={}",
            self.state.active, screen
        );
        self.state = ScreenState {
            active: screen,
            params,
        };
        self.revision += 1;
    }

    /// Moves to `back_target(active)` with cleared params.
    pub fn go_back(&mut self) {
        let target = back_target(&self.state.active);
        self.navigate(target, ScreenParams::new());
    }

    /// Registers `callback` for `event`. A focus callback runs immediately,
    /// during this call, and is not retained.
    pub fn add_listener(
        &mut self,
        event: NavigationEvent,
        callback: impl FnOnce(),
    ) -> Subscription {
        if event == NavigationEvent::Focus {
            debug!(
                "event=focus_dispatch module=nav screen={}",
                self.state.active
            );
            callback();
        }
        Subscription::default()
    }

    /// Installs a back-press intercept for as long as the guard lives.
    pub fn intercept_back(&self) -> BackIntercept {
        self.intercepts.set(self.intercepts.get() + 1);
        debug!(
            "event=back_intercept module=nav status=installed active={}",
            self.intercepts.get()
        );
        BackIntercept {
            active: Rc::clone(&self.intercepts),
        }
    }

    pub fn is_back_intercepted(&self) -> bool {
        self.intercepts.get() > 0
    }

    /// System back button: deferred to the intercept holder when one exists,
    /// otherwise `go_back`.
    pub fn hardware_back(&mut self) -> BackPress {
        if self.is_back_intercepted() {
            return BackPress::Intercepted;
        }
        self.go_back();
        BackPress::Navigated(self.state.active.clone())
    }
}
