//! API endpoints.

mod admin;
mod coffee;
mod comments;
mod contact;
mod forum;
mod messages;

use axum::Router;

use crate::middleware::{AppState, admin_auth_middleware};

/// Create the API router.
pub fn router(state: AppState) -> Router {
    let admin_routes = admin::router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        admin_auth_middleware,
    ));

    Router::new()
        .nest("/api/comments", comments::router())
        .nest("/api/forum", forum::router())
        .nest("/api/contact", contact::router())
        .nest("/api/coffee", coffee::router())
        .nest("/api/messages", messages::router())
        .nest("/api/admin", admin_routes)
        .with_state(state)
}
