//! Admin endpoints.
//!
//! Everything here sits behind the admin session cookie except login, which
//! mints it. Moderation listings default to the queue an admin most likely
//! wants (pending work), with `status=all` lifting the filter.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Response,
    routing::{get, patch, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use folio_common::{AppError, AppResult};
use folio_core::{
    forum::ModeratedItem,
    session::{SESSION_COOKIE, SESSION_TTL_DAYS},
};
use folio_db::entities::{
    ModerationStatus, coffee_chat_request, coffee_chat_request::CoffeeChatStatus, comment,
    contact_submission, contact_submission::ContactStatus, forum_reply, forum_thread,
    guest_message,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use validator::Validate;

use crate::{
    extractors::AdminAuth,
    middleware::AppState,
    response::{ApiResponse, ok_empty},
};

// ==================== Request/Response Types ====================

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Status query parameter for listings.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

/// State filter for the guest message listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateQuery {
    pub state_id: Option<String>,
}

/// Status update body for moderation transitions.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// Moderation queue counters for the admin dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub pending_comments: u64,
    pub pending_threads: u64,
    pub pending_replies: u64,
    pub unread_contacts: u64,
    pub pending_coffee_chats: u64,
}

// ==================== Helpers ====================

/// Parse a status string into a status enum, rejecting values outside the
/// kind's enum with a 400.
fn parse_status<T: DeserializeOwned>(status: &str) -> AppResult<T> {
    serde_json::from_value(serde_json::Value::String(status.to_string()))
        .map_err(|_| AppError::BadRequest(format!("Unknown status {status}")))
}

/// Resolve a listing's status filter: missing → the kind's default queue,
/// `all` → unfiltered, anything else parsed against the kind's enum.
fn status_filter<T: DeserializeOwned>(status: Option<&str>, default: &str) -> AppResult<Option<T>> {
    let status = status.unwrap_or(default);
    if status == "all" {
        Ok(None)
    } else {
        parse_status(status).map(Some)
    }
}

// ==================== Auth ====================

/// Log in with the admin password, setting the session cookie.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, ApiResponse<LoginResponse>)> {
    input.validate()?;

    let session = state.session_service.login(&input.password).await?;

    let cookie = Cookie::build((SESSION_COOKIE, session.token.clone()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .path("/")
        .build();

    Ok((
        jar.add(cookie),
        ApiResponse::ok(LoginResponse {
            token: session.token,
        }),
    ))
}

/// Log out, deleting the session and clearing the cookie.
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Response)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.session_service.logout(cookie.value()).await?;
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();

    Ok((jar.remove(removal), ok_empty()))
}

// ==================== Dashboard ====================

/// Moderation queue counters.
async fn stats(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<StatsResponse>> {
    let pending_comments = state.comment_service.count_pending().await?;
    let pending_threads = state.forum_service.count_pending_threads().await?;
    let pending_replies = state.forum_service.count_pending_replies().await?;
    let unread_contacts = state.contact_service.count_unread().await?;
    let pending_coffee_chats = state.coffee_service.count_pending().await?;

    Ok(ApiResponse::ok(StatsResponse {
        pending_comments,
        pending_threads,
        pending_replies,
        unread_contacts,
        pending_coffee_chats,
    }))
}

// ==================== Comments ====================

async fn list_comments(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<Vec<comment::Model>>> {
    let status = status_filter::<ModerationStatus>(query.status.as_deref(), "pending")?;
    let comments = state.comment_service.list_admin(status).await?;
    Ok(ApiResponse::ok(comments))
}

async fn patch_comment(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<ApiResponse<comment::Model>> {
    let status: ModerationStatus = parse_status(&body.status)?;
    let updated = state.comment_service.set_status(&id, status).await?;
    Ok(ApiResponse::ok(updated))
}

async fn delete_comment(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    state.comment_service.delete(&id).await?;
    Ok(ok_empty())
}

// ==================== Forum ====================

async fn list_threads(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<Vec<forum_thread::Model>>> {
    let status = status_filter::<ModerationStatus>(query.status.as_deref(), "pending")?;
    let threads = state.forum_service.list_threads_admin(status).await?;
    Ok(ApiResponse::ok(threads))
}

async fn list_replies(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<Vec<forum_reply::Model>>> {
    let status = status_filter::<ModerationStatus>(query.status.as_deref(), "pending")?;
    let replies = state.forum_service.list_replies_admin(status).await?;
    Ok(ApiResponse::ok(replies))
}

/// Moderate a forum item that may be a thread or a reply.
async fn patch_forum_item(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<ApiResponse<ModeratedItem>> {
    let status: ModerationStatus = parse_status(&body.status)?;
    let updated = state.forum_service.moderate_item(&id, status).await?;
    Ok(ApiResponse::ok(updated))
}

async fn patch_thread(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<ApiResponse<ModeratedItem>> {
    let status: ModerationStatus = parse_status(&body.status)?;
    let updated = state.forum_service.set_thread_status(&id, status).await?;
    Ok(ApiResponse::ok(updated))
}

async fn patch_reply(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<ApiResponse<ModeratedItem>> {
    let status: ModerationStatus = parse_status(&body.status)?;
    let updated = state.forum_service.set_reply_status(&id, status).await?;
    Ok(ApiResponse::ok(updated))
}

// ==================== Contacts ====================

async fn list_contacts(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<Vec<contact_submission::Model>>> {
    let status = status_filter::<ContactStatus>(query.status.as_deref(), "unread")?;
    let contacts = state.contact_service.list_admin(status).await?;
    Ok(ApiResponse::ok(contacts))
}

async fn patch_contact(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<ApiResponse<contact_submission::Model>> {
    let status: ContactStatus = parse_status(&body.status)?;
    let updated = state.contact_service.set_status(&id, status).await?;
    Ok(ApiResponse::ok(updated))
}

// ==================== Coffee chats ====================

async fn list_coffee(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<Vec<coffee_chat_request::Model>>> {
    let status = status_filter::<CoffeeChatStatus>(query.status.as_deref(), "pending")?;
    let requests = state.coffee_service.list_admin(status).await?;
    Ok(ApiResponse::ok(requests))
}

async fn patch_coffee(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<ApiResponse<coffee_chat_request::Model>> {
    let status: CoffeeChatStatus = parse_status(&body.status)?;
    let updated = state.coffee_service.set_status(&id, status).await?;
    Ok(ApiResponse::ok(updated))
}

// ==================== Guest messages ====================

async fn list_messages(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<StateQuery>,
) -> AppResult<ApiResponse<Vec<guest_message::Model>>> {
    let messages = state
        .guest_message_service
        .list_admin(query.state_id.as_deref())
        .await?;
    Ok(ApiResponse::ok(messages))
}

async fn delete_message(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    state.guest_message_service.delete(&id).await?;
    Ok(ok_empty())
}

/// Create the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/stats", get(stats))
        .route("/comments", get(list_comments))
        .route("/comments/{id}", patch(patch_comment).delete(delete_comment))
        .route("/forum/threads", get(list_threads))
        .route("/forum/threads/{id}", patch(patch_thread))
        .route("/forum/replies", get(list_replies))
        .route("/forum/replies/{id}", patch(patch_reply))
        .route("/forum/{id}", patch(patch_forum_item))
        .route("/contacts", get(list_contacts))
        .route("/contacts/{id}", patch(patch_contact))
        .route("/coffee", get(list_coffee))
        .route("/coffee/{id}", patch(patch_coffee))
        .route("/messages", get(list_messages))
        .route("/messages/{id}", axum::routing::delete(delete_message))
}
