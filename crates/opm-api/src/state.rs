//! # Application State
//!
//! Shared state for the Axum application: the service instances and the
//! identity gate. The services themselves are stateless; the only shared
//! mutable resource is the store behind them.

use std::sync::Arc;

use opm_auth::IdentityGate;
use opm_registry::{MutationService, QueryService};
use opm_store::MetadataStore;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only listing and detail operations.
    pub query: QueryService,
    /// Identity-gated write operations.
    pub mutation: MutationService,
    /// Resolves bearer tokens to identities.
    pub gate: IdentityGate,
}

impl AppState {
    /// Build the application state over a store and a gate.
    pub fn new(store: Arc<dyn MetadataStore>, gate: IdentityGate) -> Self {
        Self {
            query: QueryService::new(store.clone()),
            mutation: MutationService::new(store),
            gate,
        }
    }
}
