//! Habit store contract and in-memory implementation.

use crate::model::habit::{Habit, HabitId};
use crate::repo::{RepoError, RepoResult};

/// Store interface for habit records.
pub trait HabitStore {
    fn insert(&mut self, habit: Habit) -> RepoResult<HabitId>;
    fn update(&mut self, habit: &Habit) -> RepoResult<()>;
    fn get(&self, id: HabitId) -> RepoResult<Option<Habit>>;
    /// Lists habits in insertion order.
    fn list(&self) -> RepoResult<Vec<Habit>>;
}

/// `Vec`-backed habit store preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryHabitStore {
    habits: Vec<Habit>,
}

impl InMemoryHabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    fn position(&self, id: HabitId) -> Option<usize> {
        self.habits.iter().position(|habit| habit.id == id)
    }
}

impl HabitStore for InMemoryHabitStore {
    fn insert(&mut self, habit: Habit) -> RepoResult<HabitId> {
        habit.validate()?;
        if self.position(habit.id).is_some() {
            return Err(RepoError::DuplicateId(habit.id));
        }

        let id = habit.id;
        self.habits.push(habit);
        Ok(id)
    }

    fn update(&mut self, habit: &Habit) -> RepoResult<()> {
        habit.validate()?;
        let index = self
            .position(habit.id)
            .ok_or(RepoError::HabitNotFound(habit.id))?;
        self.habits[index] = habit.clone();
        Ok(())
    }

    fn get(&self, id: HabitId) -> RepoResult<Option<Habit>> {
        Ok(self.habits.iter().find(|habit| habit.id == id).cloned())
    }

    fn list(&self) -> RepoResult<Vec<Habit>> {
        Ok(self.habits.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{HabitStore, InMemoryHabitStore};
    use crate::model::habit::{Frequency, Habit};
    use crate::repo::RepoError;

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut store = InMemoryHabitStore::new();
        let habit = Habit::new("read", Frequency::Daily).unwrap();
        store.insert(habit.clone()).unwrap();

        let err = store.insert(habit.clone()).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(habit.id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_unknown_habit_returns_not_found() {
        let mut store = InMemoryHabitStore::new();
        let habit = Habit::new("read", Frequency::Daily).unwrap();

        let err = store.update(&habit).unwrap_err();
        assert_eq!(err, RepoError::HabitNotFound(habit.id));
    }

    #[test]
    fn update_rejects_blank_name() {
        let mut store = InMemoryHabitStore::new();
        let mut habit = Habit::new("read", Frequency::Daily).unwrap();
        store.insert(habit.clone()).unwrap();

        habit.name = "  ".to_string();
        assert!(matches!(
            store.update(&habit),
            Err(RepoError::HabitValidation(_))
        ));
    }
}
