//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the habits, home and calendar use cases to Dart via FRB.
//! - Own the process-wide in-memory state and serialize access to it.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported in response envelopes, never thrown.
//! - A poisoned state lock is recovered instead of propagated.

use habitlog_core::{
    available_times as available_times_inner, core_version as core_version_inner,
    default_log_level, format_display_date, format_time, init_logging as init_logging_inner,
    month_grid, now_epoch_ms as clock_now_ms, parse_iso_date, ping as ping_inner, Frequency,
    Habit, HabitService, InMemoryHabitStore, InMemoryTaskStore, RepoError, Task, TaskDraft,
    TaskService, TapOutcome, COOLDOWN_MESSAGE, WEEKDAY_LABELS,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

const LOG_DIR_ENV: &str = "HABITLOG_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "habitlog-logs";

static APP_STATE: OnceLock<Mutex<AppState>> = OnceLock::new();
static DEFAULT_LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

struct AppState {
    habits: HabitService<InMemoryHabitStore>,
    tasks: TaskService<InMemoryTaskStore>,
}

impl AppState {
    fn new() -> Self {
        Self {
            habits: HabitService::new(InMemoryHabitStore::new()),
            tasks: TaskService::new(InMemoryTaskStore::new()),
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Initializes logging with the build-mode level and the default directory.
///
/// The directory comes from `HABITLOG_LOG_DIR` when set, else a folder in
/// the OS temp dir.
#[flutter_rust_bridge::frb(sync)]
pub fn init_default_logging() -> String {
    let log_dir = default_log_dir();
    init_logging(default_log_level().to_string(), log_dir)
}

/// Returns the directory `init_default_logging` writes to.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_dir() -> String {
    resolve_default_log_dir().display().to_string()
}

/// Habit row returned to the habits screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItem {
    pub habit_id: String,
    pub name: String,
    /// Picker label (`Daily|EverySecondDay|Weekly`).
    pub frequency: String,
    pub streak: u32,
    /// Epoch milliseconds of the last counted tap.
    pub last_incremented_at: Option<i64>,
}

/// Task row returned to the home list and calendar sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub icon: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// ID of the created or touched record.
    pub id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Response for one tap on a habit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapResponse {
    /// `false` only when the tap could not be processed (bad or unknown ID).
    pub ok: bool,
    /// Whether the tap was counted.
    pub incremented: bool,
    /// Current streak after the tap; 0 when `ok` is false.
    pub streak: u32,
    /// Remaining cooldown when the tap was refused, else 0.
    pub remaining_ms: i64,
    /// Cooldown notice or failure reason; empty when counted.
    pub message: String,
}

impl TapResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            incremented: false,
            streak: 0,
            remaining_ms: 0,
            message: message.into(),
        }
    }
}

/// Month layout for the calendar screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Column headers, Monday first.
    pub weekday_labels: Vec<String>,
    pub first_weekday_offset: u32,
    pub days_in_month: u32,
    /// Row-major 6x7 cells; `None` is outside the month.
    pub cells: Vec<Option<u32>>,
}

/// Labels offered by the frequency picker, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn frequency_labels() -> Vec<String> {
    Frequency::ALL
        .iter()
        .map(|frequency| frequency.label().to_string())
        .collect()
}

/// Adds a habit from the add-habit dialog.
///
/// `frequency` accepts a picker label or wire name; `None` means `Daily`.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_add(name: String, frequency: Option<String>) -> ActionResponse {
    let frequency = match frequency {
        Some(label) => match Frequency::parse_label(&label) {
            Some(frequency) => frequency,
            None => return ActionResponse::failure(unknown_frequency_message(&label)),
        },
        None => Frequency::Daily,
    };

    match with_state(|state| state.habits.add_habit(name, frequency)) {
        Ok(id) => ActionResponse::success("Habit added.", id.to_string()),
        Err(err) => ActionResponse::failure(format!("habit_add failed: {err}")),
    }
}

/// Lists habits in the order they were added.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_list() -> Vec<HabitItem> {
    with_state(|state| state.habits.list_habits())
        .map(|habits| habits.into_iter().map(to_habit_item).collect())
        .unwrap_or_default()
}

/// Routes a tap on a habit row into the streak tracker.
///
/// `now_epoch_ms = None` uses the system clock.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_tap(habit_id: String, now_epoch_ms: Option<i64>) -> TapResponse {
    let Some(id) = parse_id(&habit_id) else {
        return TapResponse::failure(format!("habit_tap failed: invalid id `{habit_id}`"));
    };
    let now = now_epoch_ms.unwrap_or_else(clock_now_ms);

    let result = with_state(|state| {
        let outcome = state.habits.tap_habit(id, now)?;
        let streak = state
            .habits
            .get_habit(id)?
            .map_or(0, |habit| habit.streak);
        Ok::<_, RepoError>((outcome, streak))
    });

    match result {
        Ok((TapOutcome::Incremented { streak }, _)) => TapResponse {
            ok: true,
            incremented: true,
            streak,
            remaining_ms: 0,
            message: String::new(),
        },
        Ok((TapOutcome::CooldownActive { remaining_ms }, streak)) => TapResponse {
            ok: true,
            incremented: false,
            streak,
            remaining_ms,
            message: COOLDOWN_MESSAGE.to_string(),
        },
        Err(err) => TapResponse::failure(format!("habit_tap failed: {err}")),
    }
}

/// Changes a habit's frequency without touching its streak or cooldown.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_set_frequency(habit_id: String, frequency: String) -> ActionResponse {
    let Some(id) = parse_id(&habit_id) else {
        return ActionResponse::failure(format!(
            "habit_set_frequency failed: invalid id `{habit_id}`"
        ));
    };
    let Some(frequency) = Frequency::parse_label(&frequency) else {
        return ActionResponse::failure(unknown_frequency_message(&frequency));
    };

    match with_state(|state| state.habits.update_frequency(id, frequency)) {
        Ok(()) => ActionResponse::success("Frequency updated.", id.to_string()),
        Err(err) => ActionResponse::failure(format!("habit_set_frequency failed: {err}")),
    }
}

/// Adds a task from the add-task dialog. `icon = None` uses the default icon.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(name: String, date: String, time: String, icon: Option<String>) -> ActionResponse {
    let draft = TaskDraft {
        name,
        date,
        time,
        icon,
    };
    match with_state(|state| state.tasks.add_task(&draft)) {
        Ok(id) => ActionResponse::success("Task added.", id.to_string()),
        Err(err) => ActionResponse::failure(format!("task_add failed: {err}")),
    }
}

/// Replaces the fields of an existing task from the edit dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update(
    task_id: String,
    name: String,
    date: String,
    time: String,
    icon: Option<String>,
) -> ActionResponse {
    let Some(id) = parse_id(&task_id) else {
        return ActionResponse::failure(format!("task_update failed: invalid id `{task_id}`"));
    };
    let draft = TaskDraft {
        name,
        date,
        time,
        icon,
    };
    match with_state(|state| state.tasks.update_task(id, &draft)) {
        Ok(()) => ActionResponse::success("Task updated.", id.to_string()),
        Err(err) => ActionResponse::failure(format!("task_update failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(task_id: String) -> ActionResponse {
    let Some(id) = parse_id(&task_id) else {
        return ActionResponse::failure(format!("task_delete failed: invalid id `{task_id}`"));
    };
    match with_state(|state| state.tasks.delete_task(id)) {
        Ok(()) => ActionResponse::success("Task deleted.", id.to_string()),
        Err(err) => ActionResponse::failure(format!("task_delete failed: {err}")),
    }
}

/// Lists tasks in the order they were added.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> Vec<TaskItem> {
    with_state(|state| state.tasks.list_tasks())
        .map(|tasks| tasks.into_iter().map(to_task_item).collect())
        .unwrap_or_default()
}

/// Tasks shown in the calendar sheet for `day` of the month.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_for_day(day: u32) -> Vec<TaskItem> {
    with_state(|state| state.tasks.tasks_for_day_of_month(day))
        .map(|tasks| tasks.into_iter().map(to_task_item).collect())
        .unwrap_or_default()
}

/// Time slots offered by the task dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn available_times() -> Vec<String> {
    available_times_inner()
}

/// Tasks stored with exactly this ISO date; empty for unreadable input.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_on_date(iso_date: String) -> Vec<TaskItem> {
    let Some(date) = parse_iso_date(&iso_date) else {
        return Vec::new();
    };
    with_state(|state| state.tasks.tasks_on(date))
        .map(|tasks| tasks.into_iter().map(to_task_item).collect())
        .unwrap_or_default()
}

/// Formats the time picker result as `HH:MM`; `None` when out of range.
#[flutter_rust_bridge::frb(sync)]
pub fn picked_time(hour: u32, minute: u32) -> Option<String> {
    format_time(hour, minute)
}

/// Calendar layout for `month` (1-12) of `year`; `None` for an invalid month.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month(year: i32, month: u32) -> Option<CalendarMonth> {
    let grid = month_grid(year, month)?;
    Some(CalendarMonth {
        year: grid.year,
        month: grid.month,
        weekday_labels: WEEKDAY_LABELS.iter().map(|label| label.to_string()).collect(),
        first_weekday_offset: grid.first_weekday_offset,
        days_in_month: grid.days_in_month,
        cells: grid.cells().into_iter().flatten().collect(),
    })
}

/// Formats an ISO date as `Friday, 3rd May`; `None` for unreadable input.
#[flutter_rust_bridge::frb(sync)]
pub fn display_date(iso_date: String) -> Option<String> {
    parse_iso_date(&iso_date).map(format_display_date)
}

/// Drops every habit and task held by this process.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_state() {
    with_state(|state| *state = AppState::new());
    log::info!("event=state_reset module=ffi status=ok");
}

fn with_state<T>(f: impl FnOnce(&mut AppState) -> T) -> T {
    let mutex = APP_STATE.get_or_init(|| Mutex::new(AppState::new()));
    let mut guard = lock_state(mutex);
    f(&mut guard)
}

fn lock_state(mutex: &Mutex<AppState>) -> MutexGuard<'_, AppState> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("event=state_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn resolve_default_log_dir() -> PathBuf {
    DEFAULT_LOG_DIR
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(LOG_DIR_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)
        })
        .clone()
}

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn unknown_frequency_message(label: &str) -> String {
    format!("unknown frequency `{label}`; expected Daily|EverySecondDay|Weekly")
}

fn to_habit_item(habit: Habit) -> HabitItem {
    HabitItem {
        habit_id: habit.id.to_string(),
        name: habit.name,
        frequency: habit.frequency.label().to_string(),
        streak: habit.streak,
        last_incremented_at: habit.last_incremented_at,
    }
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        name: task.name,
        date: task.date,
        time: task.time,
        icon: task.icon,
    }
}
