use spendlog_config::{Config, ConfigManager};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn default_config_uses_rupee_symbol_and_home_paths() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "₹");
    assert_eq!(cfg.backup_retention, 5);
    assert_eq!(
        cfg.resolve_snapshot_file(Path::new("/home/a/.spendlog")),
        PathBuf::from("/home/a/.spendlog/data/expense_data.json")
    );
    assert_eq!(
        cfg.resolve_backup_root(Path::new("/home/a/.spendlog")),
        PathBuf::from("/home/a/.spendlog/backups")
    );
}

#[test]
fn config_manager_returns_defaults_when_missing() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency_symbol = "$".to_string();
    cfg.default_user_name = Some("Asha".to_string());
    cfg.snapshot_file = Some(dir.path().join("custom.json"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(
        loaded.resolve_snapshot_file(dir.path()),
        dir.path().join("custom.json")
    );
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"currency_symbol":"€"}"#).unwrap();

    let loaded = ConfigManager::new(path).load().expect("load");
    assert_eq!(loaded.currency_symbol, "€");
    assert_eq!(loaded.backup_retention, 5);
    assert!(loaded.ui_color_enabled);
}
