#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use tasktrack::db::tasks::Tasks;
    use tasktrack::libs::error::TaskError;
    use tasktrack::libs::task::{NewTask, SortKey, TaskFilter, TaskStatus, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("tasks.db")).unwrap();
            TaskTestContext { _temp_dir: temp_dir, tasks }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_get(ctx: &mut TaskTestContext) {
        let id = ctx
            .tasks
            .insert(&NewTask::new("Simple Test Task", Some("Test description"), date(2024, 12, 31)))
            .unwrap();

        let task = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.title.as_deref(), Some("Simple Test Task"));
        assert_eq!(task.description.as_deref(), Some("Test description"));
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.due_date, date(2024, 12, 31));

        let created = task.created_at.unwrap();
        assert_eq!(created.date(), Local::now().date_naive());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_rejects_empty_title(ctx: &mut TaskTestContext) {
        let err = ctx.tasks.insert(&NewTask::new("   ", None, None)).unwrap_err();
        assert_eq!(err.downcast_ref::<TaskError>(), Some(&TaskError::EmptyTitle));
        assert!(ctx.tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_missing_task(ctx: &mut TaskTestContext) {
        assert!(ctx.tasks.get_by_id(999).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Original title", Some("Original"), None)).unwrap();

        let update = TaskUpdate {
            title: Some("Updated title".to_string()),
            description: Some(None),
            status: Some(TaskStatus::Completed),
            due_date: Some(date(2025, 1, 15)),
        };
        assert!(ctx.tasks.update(id, &update).unwrap());

        let updated = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title.as_deref(), Some("Updated title"));
        assert_eq!(updated.description, None);
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.due_date, date(2025, 1, 15));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_partial_update_keeps_other_fields(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Keep me", Some("notes"), date(2024, 5, 1))).unwrap();
        let before = ctx.tasks.get_by_id(id).unwrap().unwrap();

        let update = TaskUpdate {
            due_date: Some(None),
            ..TaskUpdate::default()
        };
        assert!(ctx.tasks.update(id, &update).unwrap());

        let after = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(after.due_date, None);
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_errors(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Task", None, None)).unwrap();

        let err = ctx.tasks.update(id, &TaskUpdate::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<TaskError>(), Some(&TaskError::NothingToUpdate));

        let blank_title = TaskUpdate {
            title: Some(" ".to_string()),
            ..TaskUpdate::default()
        };
        let err = ctx.tasks.update(id, &blank_title).unwrap_err();
        assert_eq!(err.downcast_ref::<TaskError>(), Some(&TaskError::EmptyTitle));

        let rename = TaskUpdate {
            title: Some("Renamed".to_string()),
            ..TaskUpdate::default()
        };
        assert!(!ctx.tasks.update(id + 100, &rename).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_complete(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Finish me", None, None)).unwrap();

        assert!(ctx.tasks.complete(id).unwrap());
        assert_eq!(ctx.tasks.get_by_id(id).unwrap().unwrap().status, TaskStatus::Completed);
        assert!(!ctx.tasks.complete(id + 1).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Test task", None, None)).unwrap();

        assert!(ctx.tasks.delete(id).unwrap());
        assert!(!ctx.tasks.delete(id).unwrap());
        assert!(ctx.tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_many(ctx: &mut TaskTestContext) {
        for i in 1..=5 {
            ctx.tasks.insert(&NewTask::new(&format!("Task {}", i), None, None)).unwrap();
        }

        let ids: Vec<i64> = ctx.tasks.fetch(TaskFilter::All).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);

        let deleted = ctx.tasks.delete_many(&[ids[0], ids[1], ids[2], 12345]).unwrap();
        assert_eq!(deleted, 3);

        let remaining: Vec<i64> = ctx.tasks.fetch(TaskFilter::All).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![ids[3], ids[4]]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_filters(ctx: &mut TaskTestContext) {
        let a = ctx.tasks.insert(&NewTask::new("A", None, None)).unwrap();
        let b = ctx.tasks.insert(&NewTask::new("B", None, None)).unwrap();
        let c = ctx.tasks.insert(&NewTask::new("C", None, None)).unwrap();
        ctx.tasks.complete(b).unwrap();

        let pending: Vec<i64> = ctx.tasks.fetch(TaskFilter::Status(TaskStatus::Pending)).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(pending, vec![a, c]);

        let completed: Vec<i64> = ctx.tasks.fetch(TaskFilter::Status(TaskStatus::Completed)).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![b]);

        let by_ids: Vec<i64> = ctx.tasks.fetch(TaskFilter::ByIds(vec![c, a])).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(by_ids, vec![a, c]);

        assert!(ctx.tasks.fetch(TaskFilter::ByIds(vec![])).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_filters_then_sorts(ctx: &mut TaskTestContext) {
        let later = ctx.tasks.insert(&NewTask::new("B", None, date(2024, 6, 1))).unwrap();
        let undated = ctx.tasks.insert(&NewTask::new("A", None, None)).unwrap();
        let sooner = ctx.tasks.insert(&NewTask::new("C", None, date(2024, 1, 1))).unwrap();
        let done = ctx.tasks.insert(&NewTask::new("D", None, date(2023, 1, 1))).unwrap();
        ctx.tasks.complete(done).unwrap();

        let asc: Vec<i64> = ctx
            .tasks
            .list(TaskFilter::Status(TaskStatus::Pending), SortKey::DueDate, true)
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(asc, vec![sooner, later, undated]);

        let desc: Vec<i64> = ctx
            .tasks
            .list(TaskFilter::Status(TaskStatus::Pending), SortKey::DueDate, false)
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(desc, vec![later, sooner, undated]);

        let all_by_title: Vec<i64> = ctx.tasks.list(TaskFilter::All, SortKey::Title, false).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(all_by_title, vec![done, sooner, later, undated]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_search(ctx: &mut TaskTestContext) {
        let report = ctx.tasks.insert(&NewTask::new("Write REPORT", None, None)).unwrap();
        let notes = ctx.tasks.insert(&NewTask::new("Meeting", Some("prepare the report outline"), None)).unwrap();
        ctx.tasks.insert(&NewTask::new("Groceries", Some("milk, eggs"), None)).unwrap();
        let percent = ctx.tasks.insert(&NewTask::new("Raise to 100%", None, None)).unwrap();

        let found: Vec<i64> = ctx.tasks.search("report").unwrap().iter().map(|t| t.id).collect();
        assert_eq!(found, vec![report, notes]);

        let found: Vec<i64> = ctx.tasks.search("100%").unwrap().iter().map(|t| t.id).collect();
        assert_eq!(found, vec![percent]);

        // Wildcards in the keyword are literal
        assert!(ctx.tasks.search("_").unwrap().is_empty());
        assert!(ctx.tasks.search("nothing here").unwrap().is_empty());

        let err = ctx.tasks.search("  ").unwrap_err();
        assert_eq!(err.downcast_ref::<TaskError>(), Some(&TaskError::EmptyKeyword));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_persist_across_connections(ctx: &mut TaskTestContext) {
        let path = ctx._temp_dir.path().join("tasks.db");
        let id = ctx.tasks.insert(&NewTask::new("Persistent", None, date(2024, 2, 29))).unwrap();

        let reopened = Tasks::open(&path).unwrap();
        let task = reopened.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.title.as_deref(), Some("Persistent"));
        assert_eq!(task.due_date, date(2024, 2, 29));
    }
}
