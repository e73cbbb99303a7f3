//! # Yummerz Config
//!
//! Configuration management for the Yummerz recipe backend.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationIssue, ValidationReport};
