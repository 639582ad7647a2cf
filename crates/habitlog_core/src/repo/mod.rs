//! Store contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define the data access seams services depend on.
//! - Provide process-local stores; durable storage belongs to the host app.
//!
//! # Invariants
//! - Store writes call the record's `validate()` before mutating.
//! - Missing records surface as semantic `*NotFound` errors.

pub mod habit_repo;
pub mod task_repo;

use crate::model::habit::{HabitId, HabitValidationError};
use crate::model::task::{TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for store and service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    HabitValidation(HabitValidationError),
    TaskValidation(TaskValidationError),
    HabitNotFound(HabitId),
    TaskNotFound(TaskId),
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HabitValidation(err) => write!(f, "{err}"),
            Self::TaskValidation(err) => write!(f, "{err}"),
            Self::HabitNotFound(id) => write!(f, "habit not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::HabitValidation(err) => Some(err),
            Self::TaskValidation(err) => Some(err),
            Self::HabitNotFound(_) | Self::TaskNotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<HabitValidationError> for RepoError {
    fn from(value: HabitValidationError) -> Self {
        Self::HabitValidation(value)
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::TaskValidation(value)
    }
}
