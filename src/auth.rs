//! Role checks for the endpoints that modify categories.
//!
//! The API gateway in front of this service authenticates each request and
//! stamps it with the caller's role in the [ROLE_HEADER] header. Handlers
//! extract the role with [CallerRole] and pass it down to the service, which
//! calls [require_admin] before touching the store.

use std::{convert::Infallible, fmt::Display};

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::Error;

/// The role required to create, update, or delete categories.
pub const ADMIN_ROLE: &str = "ADMIN";

/// The request header holding the caller's role, set by the API gateway.
pub const ROLE_HEADER: &str = "x-user-role";

/// The role the API gateway attached to the current request.
///
/// A request without the role header is treated as anonymous, which no
/// privileged operation accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerRole(String);

impl CallerRole {
    /// Create a role from the raw header value.
    pub fn new(role: &str) -> Self {
        Self(role.to_string())
    }

    /// Whether this role grants admin access. The comparison ignores case.
    pub fn is_admin(&self) -> bool {
        self.0.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

impl Display for CallerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S> FromRequestParts<S> for CallerRole
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        Ok(CallerRole::new(role))
    }
}

/// Check that `role` grants admin access.
///
/// # Errors
/// Returns [Error::AccessDenied] if `role` is not [ADMIN_ROLE].
pub fn require_admin(role: &CallerRole) -> Result<(), Error> {
    if role.is_admin() {
        Ok(())
    } else {
        Err(Error::AccessDenied)
    }
}
