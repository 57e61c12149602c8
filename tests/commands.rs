#[cfg(test)]
mod tests {
    use tasklist::commands::task::{create_task, rename_task};
    use tasklist::commands::toggle::toggle_task;
    use tasklist::db::tasks::Tasks;
    use tasklist::libs::task::{validate_name, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        tasks: Tasks,
        _temp_dir: TempDir,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(&temp_dir.path().join("tasks.db")).unwrap();
            CommandTestContext {
                tasks,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_create_task(ctx: &mut CommandTestContext) {
        let name = validate_name(" Buy milk ").unwrap();
        let task = create_task(&mut ctx.tasks, &name).unwrap();

        assert!(task.is_saved());
        assert!(!task.done);
        let stored = ctx.tasks.get_by_id(task.id.unwrap()).unwrap().unwrap();
        assert_eq!(stored.name, " Buy milk ");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_rename_keeps_done_flag(ctx: &mut CommandTestContext) {
        let mut task = Task::new("Buy eggs");
        task.done = true;
        let id = ctx.tasks.save(&mut task).unwrap();

        let renamed = rename_task(&mut ctx.tasks, id, "Buy a dozen eggs").unwrap().unwrap();
        assert_eq!(renamed.name, "Buy a dozen eggs");
        assert!(renamed.done);
        assert_eq!(ctx.tasks.get_by_id(id).unwrap().unwrap(), renamed);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_rename_missing_task(ctx: &mut CommandTestContext) {
        assert!(rename_task(&mut ctx.tasks, 77, "Anything").unwrap().is_none());
        assert!(ctx.tasks.fetch_all().unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_toggle_twice(ctx: &mut CommandTestContext) {
        let task = create_task(&mut ctx.tasks, "Buy laptop").unwrap();
        let id = task.id.unwrap();

        assert!(toggle_task(&mut ctx.tasks, id).unwrap().unwrap().done);
        assert!(ctx.tasks.get_by_id(id).unwrap().unwrap().done);

        assert!(!toggle_task(&mut ctx.tasks, id).unwrap().unwrap().done);
        assert!(!ctx.tasks.get_by_id(id).unwrap().unwrap().done);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_toggle_missing_task(ctx: &mut CommandTestContext) {
        assert!(toggle_task(&mut ctx.tasks, 5).unwrap().is_none());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_toggle_only_touches_one_row(ctx: &mut CommandTestContext) {
        let first = create_task(&mut ctx.tasks, "First").unwrap().id.unwrap();
        let second = create_task(&mut ctx.tasks, "Second").unwrap().id.unwrap();

        toggle_task(&mut ctx.tasks, second).unwrap();

        assert!(!ctx.tasks.get_by_id(first).unwrap().unwrap().done);
        assert!(ctx.tasks.get_by_id(second).unwrap().unwrap().done);
    }
}
