//! Public comment endpoints.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use folio_common::{AppError, AppResult};
use folio_core::comment::{CommentTarget, CreateCommentInput, PublicComment};
use serde::Deserialize;

use crate::{
    middleware::AppState,
    response::{ApiResponse, created},
};

/// Query parameters for the public comment listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsQuery {
    pub target_type: Option<String>,
    pub target_slug: Option<String>,
}

/// Create a comment.
async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateCommentInput>,
) -> AppResult<Response> {
    let comment = state.comment_service.create(input).await?;
    Ok(created(comment))
}

/// List approved comments for a target.
async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> AppResult<ApiResponse<Vec<PublicComment>>> {
    let target_type = query
        .target_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("targetType and targetSlug are required".to_string()))?;
    let target_slug = query
        .target_slug
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("targetType and targetSlug are required".to_string()))?;

    let target_type: CommentTarget =
        serde_json::from_value(serde_json::Value::String(target_type.to_string()))
            .map_err(|_| AppError::BadRequest(format!("Unknown target type {target_type}")))?;

    let comments = state
        .comment_service
        .list_public(target_type, target_slug)
        .await?;

    Ok(ApiResponse::ok(comments))
}

/// Create the comments router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_comments).post(create_comment))
}
