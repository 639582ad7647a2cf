use habitlog_core::{Frequency, Habit, HabitValidationError, Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn habit_new_sets_defaults() {
    let habit = Habit::new("  drink water  ", Frequency::Daily).unwrap();

    assert!(!habit.id.is_nil());
    assert_eq!(habit.name, "drink water");
    assert_eq!(habit.frequency, Frequency::Daily);
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.last_incremented_at, None);
}

#[test]
fn habit_rejects_blank_name_and_nil_id() {
    assert_eq!(
        Habit::new("   ", Frequency::Weekly).unwrap_err(),
        HabitValidationError::EmptyName
    );
    assert_eq!(
        Habit::with_id(Uuid::nil(), "run", Frequency::Weekly).unwrap_err(),
        HabitValidationError::NilId
    );
}

#[test]
fn habit_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut habit = Habit::with_id(id, "meditate", Frequency::EverySecondDay).unwrap();
    habit.streak = 4;
    habit.last_incremented_at = Some(1_700_000_000_000);

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "meditate");
    assert_eq!(json["frequency"], "every_second_day");
    assert_eq!(json["streak"], 4);
    assert_eq!(json["last_incremented_at"], 1_700_000_000_000_i64);

    let decoded: Habit = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, habit);
}

#[test]
fn habit_deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": " ",
        "frequency": "weekly",
        "streak": 0,
        "last_incremented_at": null
    });

    let err = serde_json::from_value::<Habit>(value).unwrap_err();
    assert!(
        err.to_string().contains("habit name must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn habit_deserialize_rejects_unknown_frequency() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "swim",
        "frequency": "monthly",
        "streak": 0,
        "last_incremented_at": null
    });

    assert!(serde_json::from_value::<Habit>(value).is_err());
}

#[test]
fn frequency_labels_are_in_picker_order() {
    let labels = Frequency::ALL
        .iter()
        .map(|frequency| frequency.label())
        .collect::<Vec<_>>();
    assert_eq!(labels, ["Daily", "EverySecondDay", "Weekly"]);
    assert_eq!(Frequency::Weekly.to_string(), "Weekly");
}

#[test]
fn task_serialization_roundtrips_and_validates() {
    let id = Uuid::parse_str("aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee").unwrap();
    let task = Task::with_id(id, "dentist", "2024-05-03", "09:30", "default_icon").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["date"], "2024-05-03");
    assert_eq!(json["time"], "09:30");
    assert_eq!(json["icon"], "default_icon");
    assert_eq!(serde_json::from_value::<Task>(json).unwrap(), task);

    assert_eq!(
        Task::new("", "2024-05-03", "", "default_icon").unwrap_err(),
        TaskValidationError::EmptyName
    );
}
