//! Domain model for the habits and home/calendar screens.
//!
//! # Responsibility
//! - Define the plain records exchanged with the UI layer.
//! - Keep validation next to the data it protects.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil UUID.
//! - Deserialized records pass the same validation as constructed ones.

pub mod habit;
pub mod task;
