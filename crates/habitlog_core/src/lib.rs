//! Core domain logic for Habitlog.
//! This crate is the single source of truth for habit and task invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;
pub mod streak;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Frequency, Habit, HabitId, HabitValidationError, DAY_MS};
pub use model::task::{Task, TaskId, TaskValidationError, DEFAULT_TASK_ICON};
pub use repo::habit_repo::{HabitStore, InMemoryHabitStore};
pub use repo::task_repo::{InMemoryTaskStore, TaskStore};
pub use repo::{RepoError, RepoResult};
pub use schedule::{
    available_times, day_of_month, format_display_date, format_time, month_grid,
    now_epoch_ms, parse_iso_date, MonthGrid, WEEKDAY_LABELS,
};
pub use service::habit_service::{HabitService, TapOutcome, COOLDOWN_MESSAGE};
pub use service::task_service::{TaskDraft, TaskService};
pub use streak::{cooldown_state, set_frequency, try_increment, CooldownState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
