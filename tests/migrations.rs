#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tasktrack::db::db::Db;
    use tasktrack::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
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

    impl MigrationTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("migrations.db")
        }
    }

    #[test]
    fn test_fresh_connection_needs_migration() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
            [],
        )
        .unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_init_with_migrations() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let manager = MigrationManager::new();
        assert_eq!(get_db_version(&conn).unwrap(), manager.latest_version());
        assert!(!needs_migration(&conn).unwrap());

        let tables: i32 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len() as u32, manager.latest_version());
    }

    #[test]
    fn test_migration_history_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let versions: Vec<u32> = history.iter().map(|(version, _, _)| *version).collect();
        assert_eq!(versions, vec![1, 2]);
        assert_eq!(history[0].1, "create_tasks_table");
        assert_eq!(history[1].1, "add_task_indices");
        assert!(history.iter().all(|(_, _, applied_at)| !applied_at.is_empty()));
    }

    #[test]
    fn test_is_migration_applied() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        assert!(manager.is_migration_applied(&conn, 1).unwrap());
        assert!(manager.is_migration_applied(&conn, 2).unwrap());
        assert!(!manager.is_migration_applied(&conn, 99).unwrap());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_rollback_then_reapply() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        manager.rollback_to(&mut conn, 1).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(needs_migration(&conn).unwrap());

        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), manager.latest_version());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_applies_migrations_to_file(ctx: &mut MigrationTestContext) {
        let path = ctx.db_path();
        {
            let db = Db::open(&path).unwrap();
            assert!(!needs_migration(&db.conn).unwrap());
        }

        let conn = Db::open_without_migrations(&path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), MigrationManager::new().latest_version());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_without_migrations_leaves_schema_empty(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(ctx.db_path()).unwrap();

        let tables: i32 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 0);
    }
}
