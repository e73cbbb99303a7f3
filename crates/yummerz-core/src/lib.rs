//! # Yummerz Core
//!
//! The recipe service and the markdown importer it uses.
//!
//! [`RecipeService`] orchestrates a caller's [`IdentityProvider`], the
//! [`MarkdownImporter`] and a [`RecipeStore`] to implement owner-scoped CRUD,
//! search and import.
//!
//! [`IdentityProvider`]: yummerz_protocols::IdentityProvider
//! [`RecipeStore`]: yummerz_protocols::RecipeStore

mod error;
pub mod markdown;
pub mod service;

pub use error::ServiceError;
pub use markdown::{ImportError, MarkdownImporter, ParsedRecipe};
pub use service::RecipeService;
