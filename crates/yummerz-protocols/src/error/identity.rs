//! Identity errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Unauthenticated: no current identity")]
    Unauthenticated,
}
