use cgpa_config::{Config, ConfigError, ConfigManager};
use cgpa_domain::GradingScale;
use tempfile::tempdir;

#[test]
fn default_config_has_expected_values() {
    let cfg = Config::default();

    assert_eq!(cfg.default_scale, GradingScale::FivePoint);
    assert_eq!(cfg.precision(), 2);
    assert!(cfg.ui_color_enabled);
    assert!(!cfg.plain_output);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.set("default_scale", "four").expect("scale");
    cfg.set("display_precision", "3").expect("precision");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.default_scale, GradingScale::FourPoint);
    assert_eq!(loaded.display_precision, 3);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write corrupt file");

    let manager = ConfigManager::new(path);
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn unknown_scale_in_file_is_rejected_on_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"default_scale":"seven-point"}"#).expect("write file");

    let manager = ConfigManager::new(path);
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
