#[cfg(test)]
mod tests {
    use std::fs;
    use tasktrack::libs::config::{Config, ListConfig, CONFIG_FILE_NAME};
    use tasktrack::libs::data_storage::DataStorage;
    use tasktrack::libs::task::SortKey;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base_path(temp_dir.path().join("tasktrack"));
            ConfigTestContext { temp_dir, storage }
        }
    }

    #[test]
    fn test_default_list_config() {
        let config = Config::default();
        assert!(config.list.is_none());

        let list = config.list_defaults();
        assert_eq!(list.sort_by, SortKey::DueDate);
        assert!(list.ascending);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file_gives_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        // The data directory is created on first use
        assert!(ctx.temp_dir.path().join("tasktrack").is_dir());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            list: Some(ListConfig {
                sort_by: SortKey::CreatedAt,
                ascending: false,
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        let loaded = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.list_defaults().sort_by, SortKey::CreatedAt);
        assert!(!loaded.list_defaults().ascending);

        let raw = fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert!(raw.contains("\"created_at\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_config_omits_sections(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();

        let raw = fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert_eq!(raw.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_invalid_file_fails(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, r#"{"list": {"sort_by": "priority", "ascending": true}}"#).unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }
}
