//! # Custom Extractors
//!
//! Type-safe request extractors. `CurrentIdentity` resolves the bearer
//! token (if any) through the Identity Gate; it never rejects — a
//! missing or unverifiable token yields an anonymous request, and the
//! handlers decide whether anonymity is acceptable.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use opm_core::Identity;

use crate::state::AppState;

/// The identity resolved for the current request, if any.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.extract::<TypedHeader<Authorization<Bearer>>>().await {
            Ok(TypedHeader(auth)) => Some(auth.token().to_string()),
            Err(_) => None,
        };
        let auth = state.gate.resolve(token.as_deref()).await;
        Ok(Self(auth.into_identity()))
    }
}
