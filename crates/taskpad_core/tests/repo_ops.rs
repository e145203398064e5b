use chrono::NaiveDate;
use taskpad_core::{IdAllocator, MemoryTaskRepository, RepoError, TaskId, TaskRepository};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn repo_with_tasks() -> (MemoryTaskRepository, IdAllocator) {
    let mut repo = MemoryTaskRepository::new();
    let mut ids = IdAllocator::new();
    repo.add_project("secrets");
    repo.add_task("secrets", "Eat more donuts.", &mut ids).unwrap();
    repo.add_task("secrets", "Destroy all humans.", &mut ids)
        .unwrap();
    (repo, ids)
}

#[test]
fn add_task_creates_defaults_under_allocated_id() {
    let (repo, _) = repo_with_tasks();

    let task = repo.find_task(&TaskId::new("1")).expect("task 1 exists");
    assert_eq!(task.description, "Eat more donuts.");
    assert!(!task.done);
    assert_eq!(task.deadline, None);
}

#[test]
fn add_task_to_missing_project_errors_without_consuming_an_id() {
    let mut repo = MemoryTaskRepository::new();
    let mut ids = IdAllocator::new();

    let err = repo.add_task("ghosts", "nothing", &mut ids).unwrap_err();
    assert_eq!(err, RepoError::ProjectNotFound("ghosts".to_string()));

    repo.add_project("real");
    let id = repo.add_task("real", "first", &mut ids).unwrap();
    assert_eq!(id.as_str(), "1");
}

#[test]
fn set_done_toggles_and_is_idempotent() {
    let (mut repo, _) = repo_with_tasks();
    let id = TaskId::new("1");

    repo.set_done(&id, true).unwrap();
    repo.set_done(&id, true).unwrap();
    assert!(repo.find_task(&id).unwrap().done);

    repo.set_done(&id, false).unwrap();
    assert!(!repo.find_task(&id).unwrap().done);
}

#[test]
fn set_done_on_missing_task_errors() {
    let (mut repo, _) = repo_with_tasks();

    let err = repo.set_done(&TaskId::new("99"), true).unwrap_err();
    assert_eq!(err, RepoError::TaskNotFound(TaskId::new("99")));
}

#[test]
fn set_deadline_on_missing_task_errors() {
    let (mut repo, _) = repo_with_tasks();

    let err = repo
        .set_deadline(&TaskId::new("99"), date(2020, 10, 10))
        .unwrap_err();
    assert_eq!(err, RepoError::TaskNotFound(TaskId::new("99")));
}

#[test]
fn delete_removes_task_from_lookup_and_views() {
    let (mut repo, _) = repo_with_tasks();
    let id = TaskId::new("1");

    repo.delete_task(&id);
    assert!(repo.find_task(&id).is_none());

    let groups = repo.grouped_by_project();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].1.len(), 1);
    assert_eq!(groups[0].1[0].id, TaskId::new("2"));
}

#[test]
fn delete_of_missing_task_is_a_silent_no_op() {
    let (mut repo, _) = repo_with_tasks();

    repo.delete_task(&TaskId::new("99"));
    assert_eq!(repo.all_tasks().len(), 2);
}

#[test]
fn grouped_by_project_preserves_order_and_includes_empty_projects() {
    let (mut repo, _) = repo_with_tasks();
    repo.add_project("empty one");

    let groups = repo.grouped_by_project();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "secrets");
    assert_eq!(groups[1].0, "empty one");
    assert!(groups[1].1.is_empty());
}

#[test]
fn grouped_by_deadline_excludes_undated_and_orders_first_seen() {
    let (mut repo, mut ids) = repo_with_tasks();
    repo.add_project("training");
    repo.add_task("training", "SOLID", &mut ids).unwrap();

    // Task 3 gets the later date first; grouping order follows scan order
    // over all tasks, not date order.
    repo.set_deadline(&TaskId::new("1"), date(2020, 10, 11)).unwrap();
    repo.set_deadline(&TaskId::new("3"), date(2020, 10, 10)).unwrap();

    let groups = repo.grouped_by_deadline();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "11.10.2020");
    assert_eq!(groups[0].1[0].id, TaskId::new("1"));
    assert_eq!(groups[1].0, "10.10.2020");
    assert_eq!(groups[1].1[0].id, TaskId::new("3"));

    // Task 2 never got a deadline and must not appear anywhere.
    for (_, bucket) in &groups {
        assert!(bucket.iter().all(|task| task.id != TaskId::new("2")));
    }
}

#[test]
fn tasks_due_on_matches_exact_day_only() {
    let (mut repo, _) = repo_with_tasks();
    repo.set_deadline(&TaskId::new("1"), date(2020, 10, 10)).unwrap();
    repo.set_deadline(&TaskId::new("2"), date(2020, 10, 11)).unwrap();

    let due = repo.tasks_due_on(date(2020, 10, 10));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, TaskId::new("1"));

    assert!(repo.tasks_due_on(date(2021, 10, 10)).is_empty());
}

#[test]
fn rename_moves_lookup_to_the_new_id() {
    let (mut repo, _) = repo_with_tasks();

    repo.rename_task(&TaskId::new("1"), TaskId::new("foo")).unwrap();

    assert!(repo.find_task(&TaskId::new("1")).is_none());
    let task = repo.find_task(&TaskId::new("foo")).expect("renamed task");
    assert_eq!(task.description, "Eat more donuts.");
}

#[test]
fn rename_to_an_existing_id_is_rejected_unchanged() {
    let (mut repo, _) = repo_with_tasks();

    let err = repo
        .rename_task(&TaskId::new("1"), TaskId::new("2"))
        .unwrap_err();
    assert_eq!(err, RepoError::IdTaken(TaskId::new("2")));

    // Both tasks keep their original ids.
    assert_eq!(
        repo.find_task(&TaskId::new("1")).unwrap().description,
        "Eat more donuts."
    );
    assert_eq!(
        repo.find_task(&TaskId::new("2")).unwrap().description,
        "Destroy all humans."
    );
}

#[test]
fn rename_of_missing_task_errors() {
    let (mut repo, _) = repo_with_tasks();

    let err = repo
        .rename_task(&TaskId::new("99"), TaskId::new("foo"))
        .unwrap_err();
    assert_eq!(err, RepoError::TaskNotFound(TaskId::new("99")));
}

#[test]
fn duplicate_project_names_bind_to_the_first_match() {
    let mut repo = MemoryTaskRepository::new();
    let mut ids = IdAllocator::new();
    repo.add_project("twin");
    repo.add_project("twin");

    repo.add_task("twin", "goes to the first", &mut ids).unwrap();

    let groups = repo.grouped_by_project();
    assert_eq!(groups[0].1.len(), 1);
    assert!(groups[1].1.is_empty());
}

#[test]
fn find_project_returns_none_for_unknown_name() {
    let (repo, _) = repo_with_tasks();
    assert!(repo.find_project("ghosts").is_none());
    assert_eq!(repo.find_project("secrets").unwrap().name, "secrets");
}
