//! Caller identity.
//!
//! Service operations receive the caller explicitly as a
//! `&dyn IdentityProvider`; nothing is read from ambient state.

use std::fmt;

use crate::error::IdentityError;

/// An authenticated caller. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a username.
    ///
    /// Empty or whitespace-only names are rejected as unauthenticated.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IdentityError::Unauthenticated);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Supplies the identity of the caller for one operation.
///
/// Must return the same identity for the whole operation, or
/// [`IdentityError::Unauthenticated`] when no caller is established.
pub trait IdentityProvider: Send + Sync {
    fn current_identity(&self) -> Result<Identity, IdentityError>;
}

impl IdentityProvider for Identity {
    fn current_identity(&self) -> Result<Identity, IdentityError> {
        Ok(self.clone())
    }
}

impl IdentityProvider for Option<Identity> {
    fn current_identity(&self) -> Result<Identity, IdentityError> {
        self.clone().ok_or(IdentityError::Unauthenticated)
    }
}

/// A caller with no established session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_identity(&self) -> Result<Identity, IdentityError> {
        Err(IdentityError::Unauthenticated)
    }
}
