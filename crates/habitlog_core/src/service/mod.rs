//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into screen-level use cases.
//! - Keep UI/FFI layers decoupled from record bookkeeping.

pub mod habit_service;
pub mod task_service;
