use habitlog_ffi::api::{habit_add, habit_list, reset_state, task_add, task_list};

#[test]
fn reset_state_drops_habits_and_tasks() {
    assert!(habit_add("water plants".to_string(), None).ok);
    assert!(task_add("call bank".to_string(), "2024-05-03".to_string(), String::new(), None).ok);
    assert!(!habit_list().is_empty());
    assert!(!task_list().is_empty());

    reset_state();

    assert!(habit_list().is_empty());
    assert!(task_list().is_empty());
}
