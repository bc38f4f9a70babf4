//! Authentication seam for route handlers
//!
//! Identity is resolved per call by the extractor below; nothing downstream
//! reads ambient credential state.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::AppState;
use crate::services::session;

/// Extractor that validates the access_token cookie and returns the user_id
pub struct AuthUser(pub i64);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "cookie extraction failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

        let access_token = jar
            .get("access_token")
            .map(|c| c.value())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let user_id = session::validate_access_token(access_token, state.jwt_secret.as_bytes())
            .map_err(|e| {
                tracing::debug!(error = ?e, "access token rejected");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user_id))
    }
}
