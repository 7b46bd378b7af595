//! Screen orchestrator: one active screen plus its parameter bag.
//!
//! # Responsibility
//! - Hold the process-wide `ScreenState` and apply transitions.
//! - Resolve back navigation through a fixed lookup table.
//! - Hand out back-press intercepts to screens that need to veto exits.
//!
//! # Invariants
//! - Exactly one `ScreenState` exists per navigator; screens never mutate it
//!   directly.
//! - `params` are replaced on every transition, never merged.
//! - No operation here can fail.

mod navigator;
mod params;
mod screen;

pub use navigator::{
    back_target, BackIntercept, BackPress, NavigationEvent, Navigator, ScreenState, Subscription,
};
pub use params::ScreenParams;
pub use screen::Screen;
