//! # Yummerz
//!
//! Recipe management backend: owner-scoped recipe CRUD, search and markdown
//! import over a pluggable recipe store.
//!
//! This crate wires the workspace together: it initialises tracing from a
//! [`LoggingConfig`] and assembles a [`RecipeService`] over the store named in
//! a [`Config`].
//!
//! ```no_run
//! # async fn run() -> Result<(), yummerz::BootstrapError> {
//! use std::path::Path;
//! use yummerz::{Identity, RecipeInput};
//!
//! let config = yummerz::ConfigLoader::load_validated(Path::new("yummerz.toml"))?;
//! let _guard = yummerz::init_tracing(&config.logging)?;
//! let service = yummerz::build_service(&config).await?;
//!
//! let alice = Identity::new("alice").expect("non-empty username");
//! service.create(&alice, RecipeInput::new("Palačinke")).await?;
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod logging;

pub use bootstrap::{build_service, open_store, BootstrapError};
pub use logging::init_tracing;

pub use yummerz_config::{Config, ConfigLoader, LoggingConfig, StoreBackend, StoreConfig};
pub use yummerz_core::{ImportError, MarkdownImporter, RecipeService, ServiceError};
pub use yummerz_protocols::{
    Anonymous, Identity, IdentityError, IdentityProvider, Recipe, RecipeId, RecipeInput,
    RecipeStore, StoreError,
};
