//! # Identity Gate
//!
//! Resolves a request's bearer token to an [`AuthState`]. Provider
//! failures degrade to `Unauthenticated`; the admin flag comes from the
//! injected policy.

use std::sync::Arc;

use opm_core::Identity;

use crate::policy::AdminPolicy;
use crate::provider::ProfileProvider;

/// The authentication state of a request session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No token, or the provider could not confirm one.
    Unauthenticated,
    /// The provider confirmed the session and returned a login.
    Authenticated(Identity),
}

impl AuthState {
    /// The identity, if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }

    /// Consume the state, yielding the identity if authenticated.
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }

    /// Whether the session is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Resolves sessions against the provider and the admin policy.
///
/// Holds no per-request state; every resolution re-validates against the
/// provider.
#[derive(Clone)]
pub struct IdentityGate {
    provider: Arc<dyn ProfileProvider>,
    admins: Arc<dyn AdminPolicy>,
}

impl IdentityGate {
    /// Build a gate from a provider and an admin policy.
    pub fn new(provider: Arc<dyn ProfileProvider>, admins: Arc<dyn AdminPolicy>) -> Self {
        Self { provider, admins }
    }

    /// Resolve a request's token to an authentication state.
    ///
    /// `None` (no token presented) is anonymous without any outbound
    /// call. A presented token triggers exactly one provider call; any
    /// provider failure is logged and degrades to `Unauthenticated` so
    /// that anonymous reads keep working. Callers must reject
    /// `Unauthenticated` before mutating.
    pub async fn resolve(&self, token: Option<&str>) -> AuthState {
        let Some(token) = token else {
            return AuthState::Unauthenticated;
        };

        match self.provider.fetch_profile(token).await {
            Ok(profile) => {
                let is_admin = self.admins.is_admin(&profile.login);
                AuthState::Authenticated(Identity {
                    login: profile.login,
                    is_admin,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed, proceeding as anonymous");
                AuthState::Unauthenticated
            }
        }
    }
}
