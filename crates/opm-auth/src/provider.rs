//! # Profile Provider
//!
//! The external OAuth identity provider, treated as a black box that
//! exchanges a bearer token for a profile containing a `login` field.
//! [`GithubProvider`] is the production implementation; tests inject
//! their own [`ProfileProvider`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Failures of the outbound profile fetch.
///
/// The gate treats every variant the same way (degrade to anonymous);
/// the distinction exists for log lines.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with a non-ok status.
    #[error("provider returned status {0}")]
    Status(u16),

    /// The call failed at the transport level (includes timeouts).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider's response body did not contain a usable profile.
    #[error("malformed profile: {0}")]
    Malformed(String),
}

/// The profile data a provider returns for a valid session.
///
/// Providers return more fields; only `login` is relevant here and the
/// rest are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// The external login name.
    pub login: String,
}

/// A black-box source of verified profiles.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the profile for the session the token identifies.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ProviderError>;
}

/// GitHub-backed profile provider: `GET {base}/user` with a bearer token.
///
/// The base URL is injectable so tests can point at a local stub; the
/// timeout bounds the single outbound call so a hung provider cannot
/// hang the request.
#[derive(Debug, Clone)]
pub struct GithubProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GithubProvider {
    /// Build a provider against the given API base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("opm-registry")
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ProfileProvider for GithubProvider {
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ProviderError> {
        let url = format!("{}/user", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}
