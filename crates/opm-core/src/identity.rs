//! # Identity — Authenticated Request Context
//!
//! The verified external user context attached to a request. Not
//! persisted: the Identity Gate derives it from the OAuth provider on
//! each resolution, and the services receive it as an explicit
//! `Option<&Identity>` argument rather than reading ambient session
//! state.

use serde::{Deserialize, Serialize};

/// A verified external identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// External login name as reported by the provider.
    pub login: String,
    /// Whether the login is on the admin allow-list.
    pub is_admin: bool,
}

impl Identity {
    /// An ordinary (non-admin) identity.
    pub fn user(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            is_admin: false,
        }
    }

    /// An admin identity.
    pub fn admin(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            is_admin: true,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_admin {
            write!(f, "{} (admin)", self.login)
        } else {
            f.write_str(&self.login)
        }
    }
}
