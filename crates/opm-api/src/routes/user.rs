//! # User Routes
//!
//! `GET /v1/user` — echoes the identity state the gate resolved for the
//! request. Anonymous is a valid answer, not an error: the client uses
//! this to render login state.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use opm_core::Identity;

use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// Router for the user surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/user", get(current_user))
}

#[derive(Debug, Serialize)]
struct UserResponse {
    user: Option<Identity>,
    is_logged_in: bool,
    is_admin: bool,
}

async fn current_user(CurrentIdentity(identity): CurrentIdentity) -> Json<UserResponse> {
    let is_logged_in = identity.is_some();
    let is_admin = identity.as_ref().is_some_and(|i| i.is_admin);
    Json(UserResponse {
        user: identity,
        is_logged_in,
        is_admin,
    })
}
