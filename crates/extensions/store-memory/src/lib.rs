//! In-process recipe store for Yummerz.
//!
//! Keeps recipes in a map behind a lock. Nothing survives the process.

mod store;

pub use store::MemoryRecipeStore;
