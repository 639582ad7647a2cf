use chrono::NaiveDate;
use habitlog_core::{
    InMemoryTaskStore, RepoError, TaskDraft, TaskService, TaskValidationError, DEFAULT_TASK_ICON,
};
use uuid::Uuid;

fn service() -> TaskService<InMemoryTaskStore> {
    TaskService::new(InMemoryTaskStore::new())
}

#[test]
fn add_task_fills_default_icon() {
    let mut service = service();
    let id = service
        .add_task(&TaskDraft::new(" groceries ", "2024-05-03", "17:00"))
        .unwrap();

    let task = service.get_task(id).unwrap().unwrap();
    assert_eq!(task.name, "groceries");
    assert_eq!(task.date, "2024-05-03");
    assert_eq!(task.time, "17:00");
    assert_eq!(task.icon, DEFAULT_TASK_ICON);
}

#[test]
fn add_task_rejects_blank_name() {
    let mut service = service();
    let err = service
        .add_task(&TaskDraft::new("   ", "2024-05-03", ""))
        .unwrap_err();

    assert_eq!(err, RepoError::TaskValidation(TaskValidationError::EmptyName));
    assert!(service.list_tasks().unwrap().is_empty());
}

#[test]
fn update_task_replaces_fields() {
    let mut service = service();
    let id = service
        .add_task(&TaskDraft::new("gym", "2024-05-03", "07:00"))
        .unwrap();

    let mut draft = TaskDraft::new("gym (legs)", "2024-05-04", "08:15");
    draft.icon = Some("dumbbell".to_string());
    service.update_task(id, &draft).unwrap();

    let task = service.get_task(id).unwrap().unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.name, "gym (legs)");
    assert_eq!(task.date, "2024-05-04");
    assert_eq!(task.time, "08:15");
    assert_eq!(task.icon, "dumbbell");
}

#[test]
fn update_and_delete_unknown_task_return_not_found() {
    let mut service = service();
    let missing = Uuid::new_v4();

    assert_eq!(
        service
            .update_task(missing, &TaskDraft::new("x", "", ""))
            .unwrap_err(),
        RepoError::TaskNotFound(missing)
    );
    assert_eq!(
        service.delete_task(missing).unwrap_err(),
        RepoError::TaskNotFound(missing)
    );
}

#[test]
fn delete_task_removes_only_that_task() {
    let mut service = service();
    let keep = service
        .add_task(&TaskDraft::new("keep", "2024-05-03", ""))
        .unwrap();
    let removed = service
        .add_task(&TaskDraft::new("drop", "2024-05-03", ""))
        .unwrap();

    service.delete_task(removed).unwrap();

    let ids = service
        .list_tasks()
        .unwrap()
        .into_iter()
        .map(|task| task.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn tasks_for_day_of_month_matches_iso_and_display_dates() {
    let mut service = service();
    let iso = service
        .add_task(&TaskDraft::new("iso", "2024-05-03", "09:00"))
        .unwrap();
    let display = service
        .add_task(&TaskDraft::new("display", "Friday, 3rd May", "10:00"))
        .unwrap();
    service
        .add_task(&TaskDraft::new("other day", "2024-05-13", "11:00"))
        .unwrap();
    service
        .add_task(&TaskDraft::new("undated", "", ""))
        .unwrap();

    let ids = service
        .tasks_for_day_of_month(3)
        .unwrap()
        .into_iter()
        .map(|task| task.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![iso, display]);
    assert!(service.tasks_for_day_of_month(30).unwrap().is_empty());
}

#[test]
fn tasks_on_matches_exact_iso_date() {
    let mut service = service();
    let may = service
        .add_task(&TaskDraft::new("may", "2024-05-03", ""))
        .unwrap();
    service
        .add_task(&TaskDraft::new("june", "2024-06-03", ""))
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    let ids = service
        .tasks_on(date)
        .unwrap()
        .into_iter()
        .map(|task| task.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![may]);
}
