//! Public contact form endpoint.

use axum::{Json, Router, extract::State, response::Response, routing::post};
use folio_common::AppResult;
use folio_core::contact::SubmitContactInput;

use crate::{middleware::AppState, response::created};

/// Submit the contact form.
async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<SubmitContactInput>,
) -> AppResult<Response> {
    let submission = state.contact_service.submit(input).await?;
    Ok(created(submission))
}

/// Create the contact router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}
