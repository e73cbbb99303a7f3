//! Recipe service errors.

use thiserror::Error;

use yummerz_protocols::{IdentityError, StoreError};

use crate::markdown::ImportError;

/// Errors surfaced by [`RecipeService`](crate::RecipeService).
///
/// Missing records are not errors: lookups, updates and deletes report them
/// through `Option`/`bool` results.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthenticated: no current identity")]
    Unauthenticated,

    #[error("Markdown import failed: {0}")]
    Parse(#[from] ImportError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<IdentityError> for ServiceError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Unauthenticated => ServiceError::Unauthenticated,
        }
    }
}
