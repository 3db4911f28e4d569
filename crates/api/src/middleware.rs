//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use folio_common::AppResult;
use folio_core::{
    CoffeeChatService, CommentService, ContactService, ForumService, GuestMessageService,
    SessionService, session::SESSION_COOKIE,
};
use tracing::debug;

/// Marker inserted into request extensions once the admin cookie has been
/// validated. Carries the token so logout can delete the session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The validated session token.
    pub token: String,
}

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Comment service.
    pub comment_service: CommentService,
    /// Forum service.
    pub forum_service: ForumService,
    /// Contact form service.
    pub contact_service: ContactService,
    /// Coffee chat service.
    pub coffee_service: CoffeeChatService,
    /// Guest message service.
    pub guest_message_service: GuestMessageService,
    /// Admin session service.
    pub session_service: SessionService,
}

/// Admin authentication middleware.
///
/// Validates the session cookie and, on success, inserts an [`AdminSession`]
/// into the request extensions. Handlers require it through the `AdminAuth`
/// extractor, which rejects with 401 when the marker is absent. A session
/// store failure surfaces as a 500 rather than masquerading as a missing
/// session.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> AppResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let token = cookie.value().to_string();
        if state.session_service.validate(&token).await? {
            req.extensions_mut().insert(AdminSession { token });
        } else {
            debug!("Admin session cookie failed validation");
        }
    }

    Ok(next.run(req).await)
}
