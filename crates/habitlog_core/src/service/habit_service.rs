//! Habit use-case service.
//!
//! # Responsibility
//! - Provide the add / list / tap / change-frequency entry points used by the
//!   habits screen.
//! - Route taps through the streak tracker and report the outcome.
//!
//! # Invariants
//! - Streak mutation only happens through `streak::try_increment`.
//! - Frequency changes never reset streak or cooldown state.
//! - Log lines carry IDs and counters only, never habit names.

use crate::model::habit::{Frequency, Habit, HabitId};
use crate::repo::habit_repo::HabitStore;
use crate::repo::{RepoError, RepoResult};
use crate::streak::{cooldown_state, set_frequency, try_increment, CooldownState};
use log::{debug, info};

/// Notice shown by the UI when a tap lands inside the cooldown window.
pub const COOLDOWN_MESSAGE: &str =
    "You have already tapped. Please wait for the required time period.";

/// Result of routing one tap into the streak tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap was counted; `streak` is the new value.
    Incremented { streak: u32 },
    /// The tap was refused; the habit is unchanged.
    CooldownActive { remaining_ms: i64 },
}

impl TapOutcome {
    pub fn is_incremented(&self) -> bool {
        matches!(self, Self::Incremented { .. })
    }
}

/// Use-case service wrapper over a habit store.
pub struct HabitService<S: HabitStore> {
    store: S,
}

impl<S: HabitStore> HabitService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a habit with a zero streak.
    ///
    /// # Contract
    /// - The name is trimmed; blank names are rejected.
    /// - Returns the created stable habit ID.
    pub fn add_habit(
        &mut self,
        name: impl Into<String>,
        frequency: Frequency,
    ) -> RepoResult<HabitId> {
        let habit = Habit::new(name, frequency)?;
        let id = self.store.insert(habit)?;
        info!(
            "event=habit_add module=habit status=ok habit_id={} frequency={}",
            id,
            frequency.label()
        );
        Ok(id)
    }

    /// Creates a habit with the add-dialog default frequency (`Daily`).
    pub fn add_daily_habit(&mut self, name: impl Into<String>) -> RepoResult<HabitId> {
        self.add_habit(name, Frequency::Daily)
    }

    pub fn get_habit(&self, id: HabitId) -> RepoResult<Option<Habit>> {
        self.store.get(id)
    }

    /// Lists habits in the order they were added.
    pub fn list_habits(&self) -> RepoResult<Vec<Habit>> {
        self.store.list()
    }

    /// Handles one tap on a habit row at `now_ms`.
    ///
    /// A refused tap is an ordinary outcome, not an error; the caller shows
    /// `COOLDOWN_MESSAGE` for it.
    pub fn tap_habit(&mut self, id: HabitId, now_ms: i64) -> RepoResult<TapOutcome> {
        let mut habit = self.require(id)?;

        if let CooldownState::Active { remaining_ms } = cooldown_state(&habit, now_ms) {
            debug!(
                "event=habit_tap module=habit status=cooldown habit_id={} remaining_ms={}",
                id, remaining_ms
            );
            return Ok(TapOutcome::CooldownActive { remaining_ms });
        }

        try_increment(&mut habit, now_ms);
        self.store.update(&habit)?;
        info!(
            "event=habit_tap module=habit status=ok habit_id={} streak={}",
            id, habit.streak
        );
        Ok(TapOutcome::Incremented {
            streak: habit.streak,
        })
    }

    /// Changes the frequency of an existing habit.
    ///
    /// Streak and last increment time are kept as they are.
    pub fn update_frequency(&mut self, id: HabitId, frequency: Frequency) -> RepoResult<()> {
        let mut habit = self.require(id)?;
        set_frequency(&mut habit, frequency);
        self.store.update(&habit)?;
        info!(
            "event=habit_frequency module=habit status=ok habit_id={} frequency={}",
            id,
            frequency.label()
        );
        Ok(())
    }

    fn require(&self, id: HabitId) -> RepoResult<Habit> {
        self.store.get(id)?.ok_or(RepoError::HabitNotFound(id))
    }
}
