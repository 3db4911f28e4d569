//! Public guest message endpoints for the travel map.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use folio_common::AppResult;
use folio_core::guest_message::CreateGuestMessageInput;
use folio_db::entities::guest_message;
use serde::Deserialize;

use crate::{
    middleware::AppState,
    response::{ApiResponse, created},
};

/// Query parameters for the public message listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesQuery {
    pub state_id: Option<String>,
}

/// List public messages, newest first, capped at 50.
async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> AppResult<ApiResponse<Vec<guest_message::Model>>> {
    let messages = state
        .guest_message_service
        .list_public(query.state_id.as_deref())
        .await?;

    Ok(ApiResponse::ok(messages))
}

/// Post a guest message.
async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateGuestMessageInput>,
) -> AppResult<Response> {
    let message = state.guest_message_service.create(input).await?;
    Ok(created(message))
}

/// Create the guest messages router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_messages).post(create_message))
}
