use super::*;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.store.backend, StoreBackend::Sqlite);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.directory.is_none());
    assert!(!config.logging.json);
}

#[test]
fn test_store_config_default_path() {
    let store = StoreConfig::default();
    assert!(store.path.ends_with(PathBuf::from(".yummerz").join("recipes.db")));
}

#[test]
fn test_logging_config_default() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.max_log_files, 30);
}

#[test]
fn test_store_backend_display() {
    assert_eq!(StoreBackend::Sqlite.to_string(), "sqlite");
    assert_eq!(StoreBackend::Memory.to_string(), "memory");
}

#[test]
fn test_store_backend_serialization() {
    let json = serde_json::to_string(&StoreBackend::Memory).unwrap();
    assert_eq!(json, "\"memory\"");

    let backend: StoreBackend = serde_json::from_str("\"sqlite\"").unwrap();
    assert_eq!(backend, StoreBackend::Sqlite);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("sqlite"));
    assert!(json.contains("info"));
    assert!(!json.contains("directory"));
}
