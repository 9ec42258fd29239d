//! # Search Routes
//!
//! `GET /v1/search?q=` — fixed-shape listing filtered by a
//! case-insensitive substring match on name and tags. An empty or
//! missing query returns everything, ordered by name.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use opm_registry::SearchResult;

use crate::error::AppError;
use crate::state::AppState;

/// Router for the search surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/search", get(search))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    Ok(Json(state.query.search(&params.q)?))
}
