//! # opm-api — Axum API Surface
//!
//! Maps the registry's externally visible operations onto the Query and
//! Mutation Services and serializes results. Built on Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `GET  /health` — liveness probe (unauthenticated)
//! - `GET  /v1/search?q=` — search packages
//! - `GET  /v1/packages` — list packages
//! - `POST /v1/packages` — submit a package (authenticated)
//! - `GET  /v1/packages/{id}` — package detail with versions and org
//! - `GET  /v1/packages/{id}/versions` — list versions
//! - `POST /v1/packages/{id}/versions` — publish a version (authenticated, owner)
//! - `POST /v1/packages/{id}/maintainers` — append a maintainer (authenticated, owner)
//! - `GET  /v1/orgs` — list organizations
//! - `POST /v1/orgs` — submit an organization (authenticated)
//! - `GET  /v1/user` — echo the resolved identity state
//!
//! ## Middleware Stack (Tower)
//!
//! SetRequestId → TraceLayer → PropagateRequestId → CorsLayer
//!
//! ## Architecture
//!
//! No business logic in route handlers — each handler extracts its
//! inputs, resolves the identity through the [`extractors::CurrentIdentity`]
//! extractor where relevant, and delegates to the services. All errors
//! map to structured HTTP responses via [`AppError`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::AppError;
pub use state::AppState;

use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Assemble the full application router with middleware.
pub fn app(state: AppState) -> axum::Router {
    routes::router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CorsLayer::permissive()),
    )
}
