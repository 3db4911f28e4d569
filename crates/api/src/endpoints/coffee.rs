//! Public coffee chat endpoint.

use axum::{Json, Router, extract::State, response::Response, routing::post};
use folio_common::AppResult;
use folio_core::coffee_chat::SubmitCoffeeChatInput;

use crate::{middleware::AppState, response::created};

/// Submit a coffee chat request.
async fn submit_request(
    State(state): State<AppState>,
    Json(input): Json<SubmitCoffeeChatInput>,
) -> AppResult<Response> {
    let request = state.coffee_service.submit(input).await?;
    Ok(created(request))
}

/// Create the coffee chat router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_request))
}
