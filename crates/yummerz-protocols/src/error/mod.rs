//! Error types for the Yummerz protocol layer.

mod identity;
mod store;

pub use identity::*;
pub use store::*;
