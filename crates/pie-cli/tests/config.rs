use pie_cli::config::{PieConfig, load_config, migrate, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, PieConfig::default());
    assert!(config.use_structured_prefix);
    assert_eq!(config.storage.max_history_notes, 100);
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = PieConfig::default();
    config.use_structured_prefix = false;
    config.data_dir = Some(dir.path().join("data"));
    config.storage.max_history_notes = 20;
    save_config(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "use_structured_prefix": false, "max_history_notes": 40 }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert!(!config.use_structured_prefix);
    assert_eq!(config.storage.max_history_notes, 40);
}

#[test]
fn migration_keeps_an_explicit_storage_setting() {
    let json = serde_json::json!({
        "max_history_notes": 40,
        "storage": { "max_history_notes": 60 }
    });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["storage"]["max_history_notes"], 60);
    assert!(migrated.get("max_history_notes").is_none());
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
