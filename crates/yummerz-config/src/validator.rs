//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, StoreBackend};

/// One problem found in a configuration, keyed by its dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors block startup; warnings are only reported.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn warn(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// The warnings, or the first error as [`ConfigError::InvalidValue`].
    pub fn into_warnings(self) -> Result<Vec<ValidationIssue>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(first) => Err(ConfigError::InvalidValue {
                field: first.field,
                message: first.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationReport, ConfigError> {
        let mut result = ValidationReport::default();

        Self::validate_store(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_store(config: &Config, result: &mut ValidationReport) {
        match config.store.backend {
            StoreBackend::Sqlite => {
                if config.store.path.as_os_str().is_empty() {
                    result.error("store.path", "SQLite backend requires a database path");
                } else if config.store.path.is_dir() {
                    let message = format!("Database path is a directory: {:?}", config.store.path);
                    result.error("store.path", message);
                }
            }
            StoreBackend::Memory => {
                result.warn(
                    "store.backend",
                    "Memory backend is not persistent, recipes are lost on exit",
                );
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationReport) {
        if config.logging.level.trim().is_empty() {
            result.error("logging.level", "Log level cannot be empty");
        }

        if config.logging.directory.is_some() && config.logging.max_log_files == 0 {
            result.error("logging.max_log_files", "max_log_files must be greater than 0");
        }

        if let Some(dir) = &config.logging.directory {
            if dir.is_relative() {
                let message =
                    format!("Log directory {:?} is relative to the working directory", dir);
                result.warn("logging.directory", message);
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
