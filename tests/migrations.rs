#[cfg(test)]
mod tests {
    use lanes::db::db::Db;
    use lanes::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file redirect HOME, so they take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct MigrationTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_file_needs_migration(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());

        MigrationManager::new().run_migrations(&mut conn).unwrap();
        assert!(!needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<_> = history.iter().map(|(v, name, _)| (*v, name.as_str())).collect();
        assert_eq!(names, vec![(1, "create_board_tables"), (2, "add_sibling_indices")]);
        assert!(manager.is_migration_applied(&conn, 2).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_foreign_keys_enforced(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();
        let result = db.conn.execute("INSERT INTO swimlanes (board_id, name, position) VALUES (4242, 'orphan', 0)", []);
        assert!(result.is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_then_reapply(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        manager.rollback_to(&mut conn, 1).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(needs_migration(&conn).unwrap());

        // Index creation is idempotent, so version 2 applies again cleanly.
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_history_of_fresh_file_is_empty(_ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations().unwrap();
        assert!(MigrationManager::new().get_migration_history(&conn).unwrap().is_empty());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unreadable_version_is_an_error(_ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations().unwrap();
        conn.execute_batch("CREATE TABLE migrations (version TEXT); INSERT INTO migrations VALUES ('broken');")
            .unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_pending_lists_unapplied_migrations(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        assert_eq!(manager.latest_version(), 2);
        assert_eq!(
            manager.pending(&conn).unwrap(),
            vec![(1, "create_board_tables"), (2, "add_sibling_indices")]
        );

        manager.run_migrations(&mut conn).unwrap();
        assert!(manager.pending(&conn).unwrap().is_empty());
    }
}
