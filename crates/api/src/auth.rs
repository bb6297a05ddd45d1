// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The caller model.
//!
//! Identity comes from an external provider: callers arrive already
//! authenticated (or not at all). Roles are deliberately NOT part of the
//! identity payload; privileged handlers load the caller's stored role
//! from the users table at decision time.

use crate::error::ApiError;

/// An authenticated caller as supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The caller's unique identifier.
    pub id: String,
    /// The caller's email address.
    pub email: String,
    /// The caller's display name.
    pub name: String,
}

impl AuthenticatedUser {
    /// Creates an authenticated caller.
    #[must_use]
    pub const fn new(id: String, email: String, name: String) -> Self {
        Self { id, email, name }
    }
}

/// Rejects anonymous callers.
///
/// # Errors
///
/// Returns `ApiError::NotAuthenticated` if `caller` is `None`.
pub fn require_user(caller: Option<&AuthenticatedUser>) -> Result<&AuthenticatedUser, ApiError> {
    caller.ok_or(ApiError::NotAuthenticated)
}
