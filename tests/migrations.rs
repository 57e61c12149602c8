#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tasklist::db::db::Db;
    use tasklist::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("tasks.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 1);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_tasks_table_columns(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("tasks.db")).unwrap();

        let mut stmt = db.conn.prepare("SELECT name FROM pragma_table_info('tasks') ORDER BY cid").unwrap();
        let columns: Vec<String> = stmt.query_map([], |row| row.get(0)).unwrap().collect::<Result<_, _>>().unwrap();
        assert_eq!(columns, vec!["id", "name", "done"]);
    }

    #[test]
    fn test_fresh_connection_needs_migration() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_unreadable_migrations_table_is_an_error() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE migrations (id INTEGER PRIMARY KEY)", []).unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(MigrationManager::new().run_migrations(&mut conn).is_err());
        // nothing was applied on top of the broken table
        let tasks_table: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tasks_table, 0);
    }

    #[test]
    fn test_migration_history() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_tasks_table");
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("tasks.db");
        let mut conn = Connection::open(&path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 1);
    }
}
