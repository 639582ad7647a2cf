//! Task use-case service.
//!
//! # Responsibility
//! - Provide add / edit / delete / list entry points for the home screen.
//! - Answer the calendar's "tasks on this day" lookups.
//!
//! # Invariants
//! - Blank task names are rejected before reaching the store.
//! - Stored `date` text is never rewritten; lookups interpret it on read.

use crate::model::task::{Task, TaskId, DEFAULT_TASK_ICON};
use crate::repo::task_repo::TaskStore;
use crate::repo::{RepoError, RepoResult};
use crate::schedule::{day_of_month, parse_iso_date};
use chrono::NaiveDate;
use log::info;

/// Input collected by the add/edit task dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    /// Falls back to `DEFAULT_TASK_ICON` when unset.
    pub icon: Option<String>,
}

impl TaskDraft {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            icon: None,
        }
    }

    fn icon_or_default(&self) -> String {
        self.icon
            .clone()
            .unwrap_or_else(|| DEFAULT_TASK_ICON.to_string())
    }
}

/// Use-case service wrapper over a task store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task from dialog input and returns its ID.
    pub fn add_task(&mut self, draft: &TaskDraft) -> RepoResult<TaskId> {
        let task = Task::new(
            draft.name.as_str(),
            draft.date.as_str(),
            draft.time.as_str(),
            draft.icon_or_default(),
        )?;
        let id = self.store.insert(task)?;
        info!("event=task_add module=task status=ok task_id={}", id);
        Ok(id)
    }

    /// Replaces every editable field of an existing task.
    pub fn update_task(&mut self, id: TaskId, draft: &TaskDraft) -> RepoResult<()> {
        if self.store.get(id)?.is_none() {
            return Err(RepoError::TaskNotFound(id));
        }

        let task = Task::with_id(
            id,
            draft.name.as_str(),
            draft.date.as_str(),
            draft.time.as_str(),
            draft.icon_or_default(),
        )?;
        self.store.update(&task)?;
        info!("event=task_update module=task status=ok task_id={}", id);
        Ok(())
    }

    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.store.remove(id)?;
        info!("event=task_delete module=task status=ok task_id={}", id);
        Ok(())
    }

    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.store.get(id)
    }

    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.store.list()
    }

    /// Tasks whose date resolves to `day` of the month.
    ///
    /// Tasks with an unreadable date never match.
    pub fn tasks_for_day_of_month(&self, day: u32) -> RepoResult<Vec<Task>> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|task| day_of_month(&task.date) == Some(day))
            .collect())
    }

    /// Tasks stored with an ISO date equal to `date`.
    pub fn tasks_on(&self, date: NaiveDate) -> RepoResult<Vec<Task>> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|task| parse_iso_date(&task.date) == Some(date))
            .collect())
    }
}
