//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard success envelope.
///
/// Failures never pass through here; they go through `AppError`'s
/// `IntoResponse` impl, which produces the matching
/// `{ "success": false, "error": ... }` shape.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Success response with 201 Created, for submission endpoints.
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::ok(data))).into_response()
}

/// Empty success response.
#[must_use]
pub fn ok_empty() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "success": true })),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let response = ApiResponse::ok(serde_json::json!({ "id": "x" }));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "x");
    }

    #[test]
    fn test_created_status() {
        let response = created(serde_json::json!({ "id": "x" }));
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
