//! # opm-auth — Identity Gate
//!
//! Resolves an inbound request's bearer token to a verified external
//! identity and an admin flag, independent of storage. Mutation endpoints
//! consult the gate; anonymous reads never touch it.
//!
//! ## State Machine
//!
//! A request session is in one of two states:
//!
//! ```text
//! Unauthenticated ──provider confirms token──▶ Authenticated(login, is_admin)
//! ```
//!
//! Resolution makes at most one outbound call to the OAuth provider,
//! bounded by a timeout. Every provider failure (non-ok status, timeout,
//! transport error, malformed profile) degrades to `Unauthenticated`
//! rather than failing the request — anonymous reads must keep working
//! when the provider is down, and callers reject anonymity before
//! mutating.
//!
//! ## Admin Policy
//!
//! `is_admin` is computed by an injectable [`AdminPolicy`]; the shipped
//! [`AdminList`] does an exact, case-sensitive match against a fixed
//! allow-list. Swapping in a real authorization policy touches no call
//! sites.

pub mod gate;
pub mod policy;
pub mod provider;

pub use gate::{AuthState, IdentityGate};
pub use policy::{AdminList, AdminPolicy};
pub use provider::{GithubProvider, Profile, ProfileProvider, ProviderError};
