//! # Yummerz Protocols
//!
//! Core protocol definitions for the Yummerz recipe backend.
//! Contains the data model and interface definitions - no implementations.
//!
//! ## Core Types
//!
//! - [`Recipe`] - The persisted recipe record
//! - [`RecipeInput`] - Caller-supplied recipe fields (never carries an owner)
//! - [`RecipeStore`] - Trait for recipe persistence implementations
//! - [`IdentityProvider`] - Trait supplying the caller's identity

pub mod error;
pub mod identity;
pub mod recipe;
pub mod store;

pub use error::{IdentityError, StoreError};
pub use identity::{Anonymous, Identity, IdentityProvider};
pub use recipe::{Recipe, RecipeId, RecipeInput};
pub use store::RecipeStore;
