//! Service assembly from configuration.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use yummerz_config::{Config, ConfigError, ConfigValidator, StoreBackend, StoreConfig};
use yummerz_core::{RecipeService, ServiceError};
use yummerz_protocols::{RecipeStore, StoreError};
use yummerz_store_memory::MemoryRecipeStore;
use yummerz_store_sqlite::SqliteRecipeStore;

/// Errors raised while starting up.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Open the recipe store selected by `config`.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecipeStore>, BootstrapError> {
    let store: Arc<dyn RecipeStore> = match config.backend {
        StoreBackend::Sqlite => Arc::new(SqliteRecipeStore::open(&config.path).await?),
        StoreBackend::Memory => Arc::new(MemoryRecipeStore::new()),
    };
    info!(backend = %config.backend, store = store.id(), "Recipe store ready");
    Ok(store)
}

/// Validate `config` and build a [`RecipeService`] over its store.
pub async fn build_service(config: &Config) -> Result<RecipeService, BootstrapError> {
    let warnings = ConfigValidator::validate(config)?.into_warnings()?;
    for warning in &warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }

    let store = open_store(&config.store).await?;
    Ok(RecipeService::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use yummerz_config::ConfigError;
    use yummerz_protocols::{Identity, RecipeInput};

    fn memory_config() -> Config {
        let mut config = Config::default();
        config.store.backend = StoreBackend::Memory;
        config
    }

    #[tokio::test]
    async fn test_open_memory_store() {
        let store = open_store(&memory_config().store).await.unwrap();
        assert_eq!(store.id(), "memory");
    }

    #[tokio::test]
    async fn test_open_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            backend: StoreBackend::Sqlite,
            path: dir.path().join("recipes.db"),
        };
        let store = open_store(&config).await.unwrap();
        assert_eq!(store.id(), "sqlite");
        assert!(dir.path().join("recipes.db").exists());
    }

    #[tokio::test]
    async fn test_build_service_rejects_invalid_config() {
        let mut config = Config::default();
        config.store.path = PathBuf::new();

        let result = build_service(&config).await;
        assert!(matches!(
            result,
            Err(BootstrapError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[tokio::test]
    async fn test_build_service_round_trip() {
        let service = build_service(&memory_config()).await.unwrap();
        let alice = Identity::new("alice").unwrap();

        let created = service
            .create(&alice, RecipeInput::new("Palačinke"))
            .await
            .unwrap();
        let listed = service.list(&alice, None).await.unwrap();

        assert_eq!(listed, vec![created]);
    }
}
