use snipvault_cli::config::{SnipvaultConfig, load_config, save_config};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = SnipvaultConfig::with_data_dir(dir.path().join("data"));

    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"data_dir": "/tmp/snips", "storage_key": "mine"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.storage_key, "mine");
    assert_eq!(config.legacy_keys, vec!["ai-snippet-manager:v1".to_string()]);
}

#[test]
fn missing_storage_key_gets_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 1, "data_dir": "/tmp/snips"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.storage_key, "code-snippet-playground:v1");
    assert!(config.legacy_keys.is_empty());
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 99, "data_dir": "/tmp/snips"}"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn collection_keys_follow_config() {
    let mut config = SnipvaultConfig::with_data_dir("/tmp/snips");
    config.storage_key = "k".to_string();
    config.legacy_keys = vec!["old".to_string()];

    let keys = config.collection_keys();
    assert_eq!(keys.current, "k");
    assert_eq!(keys.legacy, vec!["old".to_string()]);
}

#[test]
fn out_of_range_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    for version in ["4294967297", "-1", "1.5", "\"1\""] {
        std::fs::write(
            &path,
            format!(r#"{{"config_version": {version}, "data_dir": "/tmp/snips"}}"#),
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(
            err.to_string().contains("not a valid version number"),
            "{version}: {err}"
        );
    }
}
