//! Request extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use folio_common::AppError;

use crate::middleware::AdminSession;

/// Authenticated admin extractor.
///
/// Reads the [`AdminSession`] marker set by the admin auth middleware and
/// rejects with the standard 401 envelope when it is missing.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub AdminSession);

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .map(AdminAuth)
            .ok_or(AppError::Unauthorized)
    }
}
