use spendchart::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let home = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn saved_preferences_are_reloaded() {
    let home = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
    let mut config = Config::default();
    config.set("screen_reader_mode", "true").unwrap();
    manager.save(&config).unwrap();

    let reloaded = ConfigManager::with_base_dir(home.path().to_path_buf())
        .unwrap()
        .load()
        .unwrap();
    assert!(reloaded.screen_reader_mode);
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn partial_files_fill_missing_fields() {
    let home = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
    std::fs::write(manager.config_path(), r#"{ "quiet_mode": true }"#).unwrap();
    let config = manager.load().unwrap();
    assert!(config.quiet_mode);
    assert!(config.ui_color_enabled);
    assert!(config.confirm_exit);
}

#[test]
fn corrupt_files_report_serialization_errors() {
    let home = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
    std::fs::write(manager.config_path(), "not json").unwrap();
    let err = manager.load().unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
}
