//! Flutter-facing bindings for Habitlog core.

pub mod api;
