//! # Organization Routes
//!
//! Listing and submission of organizations. An org is an optional owner
//! attribute for packages, so the surface here is deliberately small.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use opm_core::{NewOrg, Org};

use crate::error::AppError;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// Router for the org surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/orgs", get(list_orgs).post(create_org))
}

#[derive(Debug, Deserialize)]
struct CreateOrgRequest {
    name: String,
}

async fn list_orgs(State(state): State<AppState>) -> Result<Json<Vec<Org>>, AppError> {
    Ok(Json(state.query.list_orgs()?))
}

async fn create_org(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(body): Json<CreateOrgRequest>,
) -> Result<(StatusCode, Json<Org>), AppError> {
    let fields = NewOrg {
        name: body.name,
        author: String::new(),
    };
    let org = state.mutation.submit_org(identity.as_ref(), fields)?;
    Ok((StatusCode::CREATED, Json(org)))
}
