//! SQLite recipe store for Yummerz.
//!
//! Provides persistent recipe storage using SQLite.

mod schema;
mod store;

pub use store::SqliteRecipeStore;
