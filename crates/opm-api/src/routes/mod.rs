//! # Route Modules
//!
//! Each module defines the handlers for one API surface area. The
//! routers are assembled here and wired to state in `lib.rs`.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod orgs;
pub mod packages;
pub mod search;
pub mod user;

/// Assemble all route modules into one router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(search::router())
        .merge(packages::router())
        .merge(orgs::router())
        .merge(user::router())
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}
