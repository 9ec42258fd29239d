//! # Package Routes
//!
//! Listing, detail, submission, version publication, and maintainer
//! management. Mutating routes resolve the request identity and pass it
//! to the Mutation Service, which owns the authorization decision.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use opm_core::{
    ContentHash, DevStatus, NewPackage, NewVersion, OrgId, Package, PackageId, PackageKind,
    Version,
};
use opm_registry::PackageDetail;

use crate::error::AppError;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// Router for the package surface.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/packages", get(list_packages).post(create_package))
        .route("/v1/packages/{id}", get(get_details))
        .route(
            "/v1/packages/{id}/versions",
            get(list_versions).post(create_version),
        )
        .route("/v1/packages/{id}/maintainers", post(add_maintainer))
}

// ─── Request Bodies ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CreatePackageRequest {
    name: String,
    /// Honored only for admin identities; otherwise the submitting login
    /// becomes the author.
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    kind: PackageKind,
    #[serde(default)]
    dev_status: DevStatus,
    #[serde(default)]
    org_id: Option<u64>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CreateVersionRequest {
    tag_name: String,
    content_hash: String,
}

#[derive(Debug, Deserialize)]
struct AddMaintainerRequest {
    login: String,
}

// ─── Handlers ────────────────────────────────────────────────────────

async fn list_packages(State(state): State<AppState>) -> Result<Json<Vec<Package>>, AppError> {
    Ok(Json(state.query.list_packages()?))
}

async fn get_details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PackageDetail>, AppError> {
    Ok(Json(state.query.get_details(PackageId(id))?))
}

async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Version>>, AppError> {
    Ok(Json(state.query.list_for_package(PackageId(id))?))
}

async fn create_package(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(body): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<Package>), AppError> {
    let fields = NewPackage {
        name: body.name,
        author: body.author.unwrap_or_default(),
        license: body.license,
        kind: body.kind,
        dev_status: body.dev_status,
        org_id: body.org_id.map(OrgId),
        tags: body.tags,
    };
    let package = state.mutation.submit_package(identity.as_ref(), fields)?;
    Ok((StatusCode::CREATED, Json(package)))
}

async fn create_version(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<u64>,
    Json(body): Json<CreateVersionRequest>,
) -> Result<(StatusCode, Json<Version>), AppError> {
    let content_hash = ContentHash::parse(&body.content_hash).map_err(AppError::from)?;
    let fields = NewVersion {
        tag_name: body.tag_name,
        content_hash,
        author: String::new(),
    };
    let version = state
        .mutation
        .submit_version(identity.as_ref(), PackageId(id), fields)?;
    Ok((StatusCode::CREATED, Json(version)))
}

async fn add_maintainer(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<u64>,
    Json(body): Json<AddMaintainerRequest>,
) -> Result<Json<Package>, AppError> {
    let package = state
        .mutation
        .add_maintainer(identity.as_ref(), PackageId(id), &body.login)?;
    Ok(Json(package))
}
