//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical habit record rendered by the habits screen.
//! - Map each `Frequency` variant to its cooldown and display label.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `name` is never blank.
//! - `streak` only grows, and only through `streak::try_increment`.
//!
//! # See also
//! - crate::streak

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one habit.
pub type HabitId = Uuid;

/// One day in epoch milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Cadence a habit is expected to be performed at.
///
/// Each variant carries an implicit minimum cooldown between two counted
/// streak increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Cooldown of one day.
    Daily,
    /// Cooldown of two days.
    EverySecondDay,
    /// Cooldown of seven days.
    Weekly,
}

impl Frequency {
    /// All variants in frequency-picker order.
    pub const ALL: [Frequency; 3] = [
        Frequency::Daily,
        Frequency::EverySecondDay,
        Frequency::Weekly,
    ];

    /// Minimum elapsed time between two successful increments.
    pub fn cooldown_ms(self) -> i64 {
        match self {
            Frequency::Daily => DAY_MS,
            Frequency::EverySecondDay => 2 * DAY_MS,
            Frequency::Weekly => 7 * DAY_MS,
        }
    }

    /// Label shown by the frequency picker.
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::EverySecondDay => "EverySecondDay",
            Frequency::Weekly => "Weekly",
        }
    }

    /// Parses a picker label or wire name, ignoring case and separators.
    ///
    /// Returns `None` for unknown input.
    pub fn parse_label(value: &str) -> Option<Self> {
        let normalized = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "daily" => Some(Frequency::Daily),
            "everysecondday" => Some(Frequency::EverySecondDay),
            "weekly" => Some(Frequency::Weekly),
            _ => None,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failures for habit records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    NilId,
    EmptyName,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "habit id must not be nil"),
            Self::EmptyName => write!(f, "habit name must not be empty"),
        }
    }
}

impl Error for HabitValidationError {}

/// Canonical habit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HabitRecord")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub frequency: Frequency,
    /// Count of cooldown-respecting increments.
    pub streak: u32,
    /// Unix epoch milliseconds of the last counted increment.
    pub last_incremented_at: Option<i64>,
}

impl Habit {
    /// Creates a fresh habit with a generated ID and a zero streak.
    ///
    /// The name is stored trimmed.
    pub fn new(
        name: impl Into<String>,
        frequency: Frequency,
    ) -> Result<Self, HabitValidationError> {
        Self::with_id(Uuid::new_v4(), name, frequency)
    }

    /// Creates a fresh habit with a caller-provided ID.
    pub fn with_id(
        id: HabitId,
        name: impl Into<String>,
        frequency: Frequency,
    ) -> Result<Self, HabitValidationError> {
        let habit = Self {
            id,
            name: name.into().trim().to_string(),
            frequency,
            streak: 0,
            last_incremented_at: None,
        };
        habit.validate()?;
        Ok(habit)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.id.is_nil() {
            return Err(HabitValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Unchecked wire shape; converted into `Habit` through validation.
#[derive(Deserialize)]
struct HabitRecord {
    id: HabitId,
    name: String,
    frequency: Frequency,
    streak: u32,
    last_incremented_at: Option<i64>,
}

impl TryFrom<HabitRecord> for Habit {
    type Error = HabitValidationError;

    fn try_from(value: HabitRecord) -> Result<Self, Self::Error> {
        let habit = Habit {
            id: value.id,
            name: value.name,
            frequency: value.frequency,
            streak: value.streak,
            last_incremented_at: value.last_incremented_at,
        };
        habit.validate()?;
        Ok(habit)
    }
}

#[cfg(test)]
mod tests {
    use super::{Frequency, DAY_MS};

    #[test]
    fn cooldowns_match_cadence() {
        assert_eq!(Frequency::Daily.cooldown_ms(), DAY_MS);
        assert_eq!(Frequency::EverySecondDay.cooldown_ms(), 2 * DAY_MS);
        assert_eq!(Frequency::Weekly.cooldown_ms(), 7 * DAY_MS);
    }

    #[test]
    fn parse_label_accepts_labels_and_wire_names() {
        for frequency in Frequency::ALL {
            assert_eq!(Frequency::parse_label(frequency.label()), Some(frequency));
        }
        assert_eq!(
            Frequency::parse_label(" every_second_day "),
            Some(Frequency::EverySecondDay)
        );
        assert_eq!(Frequency::parse_label("WEEKLY"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse_label("monthly"), None);
    }
}
