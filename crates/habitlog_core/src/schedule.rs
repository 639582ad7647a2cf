//! Date and time helpers behind the task dialog and calendar screen.
//!
//! # Responsibility
//! - Produce the time-slot list offered by the task dialog.
//! - Format picked dates the way the home list displays them.
//! - Resolve stored task dates to a day of month for calendar lookups.
//! - Lay out a month as a Monday-first grid.
//!
//! # Invariants
//! - Helpers are pure; only `now_epoch_ms` reads the clock.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minutes between two consecutive time slots.
pub const TIME_SLOT_STEP_MINUTES: u32 = 5;

/// Column headers of the calendar grid, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

const GRID_WEEKS: usize = 6;

static FIRST_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("first-number regex must compile"));

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Returns every selectable `HH:MM` slot of a day, from `00:00` to `23:55`.
pub fn available_times() -> Vec<String> {
    let slots_per_hour = 60 / TIME_SLOT_STEP_MINUTES;
    (0..24 * slots_per_hour)
        .map(|index| {
            format!(
                "{:02}:{:02}",
                index / slots_per_hour,
                (index % slots_per_hour) * TIME_SLOT_STEP_MINUTES
            )
        })
        .collect()
}

/// Formats a picked time as `HH:MM`.
///
/// Returns `None` when `hour` or `minute` is out of range.
pub fn format_time(hour: u32, minute: u32) -> Option<String> {
    if hour >= 24 || minute >= 60 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}

/// English ordinal suffix for a day of month.
pub fn day_of_month_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a date as `Friday, 3rd May`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{}, {}{} {}",
        date.format("%A"),
        date.day(),
        day_of_month_suffix(date.day()),
        date.format("%B")
    )
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Resolves a stored task date to its day of month.
///
/// ISO dates yield their day component. Free text yields the first run of
/// digits (`Friday, 3rd May` -> 3). Values outside `1..=31` yield `None`.
pub fn day_of_month(value: &str) -> Option<u32> {
    if let Some(date) = parse_iso_date(value) {
        return Some(date.day());
    }

    let day = FIRST_NUMBER_RE
        .find(value)
        .and_then(|found| found.as_str().parse::<u32>().ok())?;
    (1..=31).contains(&day).then_some(day)
}

/// Calendar layout data for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1, Monday = 0.
    pub first_weekday_offset: u32,
    pub days_in_month: u32,
}

impl MonthGrid {
    /// Returns six Monday-first weeks; `None` cells are outside the month.
    pub fn cells(&self) -> Vec<[Option<u32>; 7]> {
        (0..GRID_WEEKS)
            .map(|week| {
                let mut row = [None; 7];
                for (weekday, cell) in row.iter_mut().enumerate() {
                    let position = (week * 7 + weekday) as i64;
                    let day = position - i64::from(self.first_weekday_offset) + 1;
                    if (1..=i64::from(self.days_in_month)).contains(&day) {
                        *cell = Some(day as u32);
                    }
                }
                row
            })
            .collect()
    }
}

/// Builds the grid for `month` (1-12) of `year`; `None` for an invalid month.
pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days_in_month = u32::try_from(next_first.signed_duration_since(first).num_days()).ok()?;

    Some(MonthGrid {
        year,
        month,
        first_weekday_offset: first.weekday().num_days_from_monday(),
        days_in_month,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        available_times, day_of_month, day_of_month_suffix, format_display_date, format_time,
        month_grid, parse_iso_date,
    };
    use chrono::NaiveDate;

    #[test]
    fn available_times_cover_day_in_five_minute_steps() {
        let times = available_times();
        assert_eq!(times.len(), 288);
        assert_eq!(times.first().map(String::as_str), Some("00:00"));
        assert_eq!(times[1], "00:05");
        assert_eq!(times[12], "01:00");
        assert_eq!(times.last().map(String::as_str), Some("23:55"));
    }

    #[test]
    fn format_time_pads_and_rejects_out_of_range() {
        assert_eq!(format_time(7, 5).as_deref(), Some("07:05"));
        assert_eq!(format_time(24, 0), None);
        assert_eq!(format_time(10, 60), None);
    }

    #[test]
    fn suffixes_follow_english_ordinals() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (31, "st"),
        ];
        for (day, expected) in cases {
            assert_eq!(day_of_month_suffix(day), expected, "day {day}");
        }
    }

    #[test]
    fn display_date_uses_weekday_ordinal_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(format_display_date(date), "Friday, 3rd May");
    }

    #[test]
    fn day_of_month_reads_iso_and_free_text() {
        assert_eq!(day_of_month("2024-05-03"), Some(3));
        assert_eq!(day_of_month("Friday, 3rd May"), Some(3));
        assert_eq!(day_of_month("Tuesday, 21st May"), Some(21));
        assert_eq!(day_of_month("someday"), None);
        assert_eq!(day_of_month("2024/05/03"), None);
        assert_eq!(parse_iso_date(" 2024-02-29 "), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn month_grid_places_first_day_on_its_weekday() {
        // 1 May 2024 is a Wednesday.
        let grid = month_grid(2024, 5).unwrap();
        assert_eq!(grid.first_weekday_offset, 2);
        assert_eq!(grid.days_in_month, 31);

        let cells = grid.cells();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], [None, None, Some(1), Some(2), Some(3), Some(4), Some(5)]);
        let filled = cells.iter().flatten().filter(|cell| cell.is_some()).count();
        assert_eq!(filled, 31);
    }

    #[test]
    fn month_grid_handles_december_and_leap_february() {
        assert_eq!(month_grid(2023, 12).unwrap().days_in_month, 31);
        assert_eq!(month_grid(2024, 2).unwrap().days_in_month, 29);
        assert_eq!(month_grid(2023, 2).unwrap().days_in_month, 28);
        assert!(month_grid(2024, 13).is_none());
    }
}
