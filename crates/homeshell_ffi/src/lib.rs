//! Flutter-facing bindings for HomeShell core.

pub mod api;
