//! Tracing initialisation.

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use yummerz_config::LoggingConfig;

use crate::bootstrap::BootstrapError;

/// Initialize tracing with console output and, when a log directory is
/// configured, a daily-rotated log file.
///
/// `RUST_LOG` overrides `config.level`. The returned guard flushes the file
/// writer on drop and must be kept alive for as long as logging is needed.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>, BootstrapError> {
    let env_filter = env_filter(config)?;

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            let (writer, guard) = file_writer(dir, config.max_log_files)?;
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json_console = config.json.then(|| fmt::layer().json().with_target(true));
    let text_console = (!config.json).then(|| fmt::layer().with_target(true).with_ansi(true));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(text_console)
        .with(file_layer)
        .try_init()
        .map_err(|e| BootstrapError::Logging(e.to_string()))?;

    Ok(guard)
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, BootstrapError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| BootstrapError::Logging(format!("invalid log level '{}': {}", config.level, e))),
    }
}

fn file_writer(dir: &Path, max_log_files: usize) -> Result<(NonBlocking, WorkerGuard), BootstrapError> {
    std::fs::create_dir_all(dir).map_err(|e| BootstrapError::Logging(e.to_string()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("yummerz")
        .filename_suffix("log")
        .max_log_files(max_log_files)
        .build(dir)
        .map_err(|e| BootstrapError::Logging(e.to_string()))?;

    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("logs");

        let (_writer, _guard) = file_writer(&dir, 3).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_env_filter_from_config() {
        let config = LoggingConfig {
            level: "yummerz=debug,warn".to_string(),
            ..Default::default()
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_init_tracing_writes_log_file() {
        let temp = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            directory: Some(temp.path().to_path_buf()),
            json: false,
            max_log_files: 2,
        };

        let guard = init_tracing(&config).unwrap();
        assert!(guard.is_some());
        tracing::info!("tracing initialised for test");
        drop(guard);

        let files = std::fs::read_dir(temp.path()).unwrap().count();
        assert!(files >= 1);

        // A second global subscriber is refused.
        assert!(matches!(
            init_tracing(&LoggingConfig::default()),
            Err(BootstrapError::Logging(_))
        ));
    }
}
