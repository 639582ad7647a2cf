//! Habit streak tracker.
//!
//! # Responsibility
//! - Gate streak increments behind the cooldown implied by `Frequency`.
//! - Keep all streak mutation in one place, independent of any UI runtime.
//!
//! # Invariants
//! - The first increment of a habit always succeeds.
//! - A refused increment leaves the habit byte-for-byte unchanged.
//! - Cooldown state is derived from `last_incremented_at`; nothing else is stored.

use crate::model::habit::{Frequency, Habit};

/// Derived cooldown state of one habit at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    /// The next increment will be counted.
    Ready,
    /// The next increment will be refused for `remaining_ms` more milliseconds.
    Active { remaining_ms: i64 },
}

/// Computes whether `habit` may be incremented at `now_ms`.
pub fn cooldown_state(habit: &Habit, now_ms: i64) -> CooldownState {
    let Some(last) = habit.last_incremented_at else {
        return CooldownState::Ready;
    };

    let elapsed = now_ms.saturating_sub(last);
    let cooldown = habit.frequency.cooldown_ms();
    if elapsed >= cooldown {
        CooldownState::Ready
    } else {
        CooldownState::Active {
            remaining_ms: cooldown.saturating_sub(elapsed),
        }
    }
}

/// Tries to count one increment of `habit` at `now_ms`.
///
/// Returns `true` and bumps `streak` / `last_incremented_at` when the habit
/// has never been incremented or its cooldown has elapsed. Returns `false`
/// and leaves the habit untouched otherwise. A `now_ms` earlier than the
/// last increment counts as "cooldown active".
pub fn try_increment(habit: &mut Habit, now_ms: i64) -> bool {
    if cooldown_state(habit, now_ms) != CooldownState::Ready {
        return false;
    }

    habit.streak = habit.streak.saturating_add(1);
    habit.last_incremented_at = Some(now_ms);
    true
}

/// Replaces the habit frequency.
///
/// Neither `streak` nor `last_incremented_at` is reset, so the next increment
/// is judged against the new frequency's cooldown measured from the old
/// increment time.
pub fn set_frequency(habit: &mut Habit, frequency: Frequency) {
    habit.frequency = frequency;
}
