//! Public forum endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Response,
    routing::get,
};
use folio_common::{AppError, AppResult};
use folio_core::forum::{
    CreateReplyInput, CreateThreadInput, ThreadDetail, ThreadSummary, ThreadTopic,
};
use serde::Deserialize;

use crate::{
    middleware::AppState,
    response::{ApiResponse, created},
};

/// Query parameters for the topic listing.
#[derive(Debug, Deserialize)]
pub struct ListThreadsQuery {
    pub topic: Option<String>,
}

/// Create a thread.
async fn create_thread(
    State(state): State<AppState>,
    Json(input): Json<CreateThreadInput>,
) -> AppResult<Response> {
    let thread = state.forum_service.create_thread(input).await?;
    Ok(created(thread))
}

/// List approved threads in a topic.
async fn list_threads(
    State(state): State<AppState>,
    Query(query): Query<ListThreadsQuery>,
) -> AppResult<ApiResponse<Vec<ThreadSummary>>> {
    let topic = query
        .topic
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("topic is required".to_string()))?;

    let topic: ThreadTopic = serde_json::from_value(serde_json::Value::String(topic.to_string()))
        .map_err(|_| AppError::BadRequest(format!("Unknown topic {topic}")))?;

    let threads = state.forum_service.list_threads(topic).await?;

    Ok(ApiResponse::ok(threads))
}

/// Get an approved thread with its approved replies.
async fn get_thread(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ThreadDetail>> {
    let thread = state.forum_service.get_thread(&id).await?;
    Ok(ApiResponse::ok(thread))
}

/// Create a reply on a thread.
async fn create_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CreateReplyInput>,
) -> AppResult<Response> {
    let reply = state.forum_service.create_reply(&id, input).await?;
    Ok(created(reply))
}

/// Create the forum router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_threads).post(create_thread))
        .route("/{id}", get(get_thread).post(create_reply))
}
