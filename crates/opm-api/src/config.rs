//! # Configuration
//!
//! Env-driven configuration for the registry server, read once at
//! startup.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `OPM_BIND_ADDR` | `0.0.0.0:8000` | Listen address |
//! | `OPM_GITHUB_API_URL` | `https://api.github.com` | Identity provider base URL |
//! | `OPM_PROVIDER_TIMEOUT_SECS` | `5` | Timeout for the profile fetch |
//! | `OPM_ADMINS` | empty | Comma-separated admin logins |

use std::time::Duration;

use thiserror::Error;

/// A malformed configuration value.
#[derive(Error, Debug)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    /// The environment variable at fault.
    pub var: &'static str,
    /// The rejected value.
    pub value: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the server binds to.
    pub bind_addr: String,
    /// Base URL of the identity provider API.
    pub github_api_url: String,
    /// Timeout for the single outbound profile fetch.
    pub provider_timeout: Duration,
    /// Admin allow-list (exact, case-sensitive logins).
    pub admin_logins: Vec<String>,
}

impl ApiConfig {
    /// Read configuration from the environment, applying defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env_or("OPM_BIND_ADDR", "0.0.0.0:8000");
        let github_api_url = env_or("OPM_GITHUB_API_URL", "https://api.github.com");

        let timeout_secs = env_or("OPM_PROVIDER_TIMEOUT_SECS", "5");
        let timeout_secs: u64 = timeout_secs.parse().map_err(|_| ConfigError {
            var: "OPM_PROVIDER_TIMEOUT_SECS",
            value: timeout_secs,
        })?;

        let admin_logins = std::env::var("OPM_ADMINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            bind_addr,
            github_api_url,
            provider_timeout: Duration::from_secs(timeout_secs),
            admin_logins,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
