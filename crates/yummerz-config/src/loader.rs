//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;
use crate::validator::ConfigValidator;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: Config = toml::from_str(&expanded)?;
        Self::expand_paths(&mut config);
        Ok(config)
    }

    /// Load a file and reject it if validation reports any error.
    pub fn load_validated(path: &Path) -> Result<Config, ConfigError> {
        let config = Self::load(path)?;
        ConfigValidator::validate(&config)?.into_warnings()?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_VAR.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    fn expand_paths(config: &mut Config) {
        config.store.path = Self::expand_pathbuf(&config.store.path);
        if let Some(dir) = config.logging.directory.take() {
            config.logging.directory = Some(Self::expand_pathbuf(&dir));
        }
    }

    fn expand_pathbuf(path: &Path) -> PathBuf {
        PathBuf::from(Self::expand_path(&path.to_string_lossy()))
    }

    /// Expand shell-style paths (e.g., `~/.yummerz`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StoreBackend;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_store_config() {
        let content = r#"
            [store]
            backend = "memory"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [store]
            backend = "sqlite"
            path = "/var/lib/yummerz/recipes.db"

            [logging]
            level = "debug"
            directory = "/var/log/yummerz"
            json = true
            max_log_files = 7
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/var/lib/yummerz/recipes.db"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, Some(PathBuf::from("/var/log/yummerz")));
        assert!(config.logging.json);
        assert_eq!(config.logging.max_log_files, 7);
    }

    #[test]
    fn test_load_unknown_backend() {
        let content = r#"
            [store]
            backend = "postgres"
        "#;
        let result = ConfigLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_tilde_paths_expanded() {
        let content = r#"
            [store]
            path = "~/recipes.db"

            [logging]
            directory = "~/logs"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert!(!config.store.path.to_string_lossy().starts_with('~'));
        assert!(config.store.path.ends_with("recipes.db"));
        let dir = config.logging.directory.unwrap();
        assert!(!dir.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"warn\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/yummerz.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_validated_rejects_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"\"").unwrap();

        let result = ConfigLoader::load_validated(file.path());
        match result {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "logging.level"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_load_validated_accepts_defaults() {
        let file = NamedTempFile::new().unwrap();
        assert!(ConfigLoader::load_validated(file.path()).is_ok());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("YUMMERZ_TEST_DB_PATH", "/tmp/yummerz-test.db");
        }
        let content = "[store]\npath = \"${YUMMERZ_TEST_DB_PATH}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/yummerz-test.db"));
        unsafe {
            std::env::remove_var("YUMMERZ_TEST_DB_PATH");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_YUMMERZ_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/usr/local/bin"), "/usr/local/bin");
    }
}
