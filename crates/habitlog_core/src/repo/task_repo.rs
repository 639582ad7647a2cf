//! Task store contract and in-memory implementation.

use crate::model::task::{Task, TaskId};
use crate::repo::{RepoError, RepoResult};

/// Store interface for task records.
pub trait TaskStore {
    fn insert(&mut self, task: Task) -> RepoResult<TaskId>;
    fn update(&mut self, task: &Task) -> RepoResult<()>;
    fn get(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists tasks in insertion order.
    fn list(&self) -> RepoResult<Vec<Task>>;
    /// Removes a task, returning the removed record.
    fn remove(&mut self, id: TaskId) -> RepoResult<Task>;
}

/// `Vec`-backed task store preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn insert(&mut self, task: Task) -> RepoResult<TaskId> {
        task.validate()?;
        if self.position(task.id).is_some() {
            return Err(RepoError::DuplicateId(task.id));
        }

        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    fn update(&mut self, task: &Task) -> RepoResult<()> {
        task.validate()?;
        let index = self
            .position(task.id)
            .ok_or(RepoError::TaskNotFound(task.id))?;
        self.tasks[index] = task.clone();
        Ok(())
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        Ok(self.tasks.iter().find(|task| task.id == id).cloned())
    }

    fn list(&self) -> RepoResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn remove(&mut self, id: TaskId) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }
}
