//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shown on the home list and calendar sheet.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `name` is never blank.
//! - `date` and `time` are stored as entered; lookups interpret them lazily.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task.
pub type TaskId = Uuid;

/// Icon key used when the caller does not pick one.
pub const DEFAULT_TASK_ICON: &str = "default_icon";

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyName,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyName => write!(f, "task name must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Free text (`Friday, 3rd May`) or ISO `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, or empty when no time was picked.
    pub time: String,
    pub icon: String,
}

impl Task {
    /// Creates a task with a generated ID.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), name, date, time, icon)
    }

    /// Creates a task with a caller-provided ID. The name is stored trimmed.
    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            name: name.into().trim().to_string(),
            date: date.into(),
            time: time.into(),
            icon: icon.into(),
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    name: String,
    date: String,
    time: String,
    icon: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: value.id,
            name: value.name,
            date: value.date,
            time: value.time,
            icon: value.icon,
        };
        task.validate()?;
        Ok(task)
    }
}
