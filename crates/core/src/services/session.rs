//! Admin session service.

use chrono::{Duration, Utc};
use folio_common::{AppError, AppResult, IdGenerator};
use folio_db::{entities::admin_session, repositories::AdminSessionRepository};
use sea_orm::Set;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

/// Session lifetime in days.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Admin session service.
///
/// A single shared admin password gates the admin surface. A successful login
/// mints an opaque token stored server side; the cookie carries only the
/// token.
#[derive(Clone)]
pub struct SessionService {
    session_repo: AdminSessionRepository,
    admin_password: String,
    id_gen: IdGenerator,
}

impl SessionService {
    /// Create a new session service.
    #[must_use]
    pub const fn new(session_repo: AdminSessionRepository, admin_password: String) -> Self {
        Self {
            session_repo,
            admin_password,
            id_gen: IdGenerator::new(),
        }
    }

    /// Log in with the admin password, minting a 7-day session.
    pub async fn login(&self, password: &str) -> AppResult<admin_session::Model> {
        if password != self.admin_password {
            return Err(AppError::Unauthorized);
        }

        let model = admin_session::ActiveModel {
            id: Set(self.id_gen.generate()),
            token: Set(self.id_gen.generate_token()),
            expires_at: Set((Utc::now() + Duration::days(SESSION_TTL_DAYS)).into()),
            created_at: Set(Utc::now().into()),
        };

        self.session_repo.create(model).await
    }

    /// Check whether a token names a live session.
    ///
    /// An expired session is deleted on the spot, so a stale cookie only ever
    /// costs one extra lookup.
    pub async fn validate(&self, token: &str) -> AppResult<bool> {
        let Some(session) = self.session_repo.find_by_token(token).await? else {
            return Ok(false);
        };

        if session.expires_at < Utc::now() {
            self.session_repo.delete(session).await?;
            return Ok(false);
        }

        Ok(true)
    }

    /// Log out, deleting the session behind the token.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.session_repo.delete_by_token(token).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn service_with(db: sea_orm::DatabaseConnection) -> SessionService {
        SessionService::new(
            AdminSessionRepository::new(Arc::new(db)),
            "correct-horse".to_string(),
        )
    }

    fn session(token: &str, expires_at: chrono::DateTime<Utc>) -> admin_session::Model {
        admin_session::Model {
            id: "s1".to_string(),
            token: token.to_string(),
            expires_at: expires_at.into(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        // Rejected before any database access.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let result = service.login("wrong").await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_login_mints_week_long_session() {
        let expected = session("tok", Utc::now() + Duration::days(7));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[expected]])
            .into_connection();
        let service = service_with(db);

        let result = service.login("correct-horse").await.unwrap();

        assert!(result.expires_at > Utc::now() + Duration::days(6));
    }

    #[tokio::test]
    async fn test_validate_unknown_token_is_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<admin_session::Model>::new()])
            .into_connection();
        let service = service_with(db);

        assert!(!service.validate("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_validate_expired_token_deletes_session() {
        let expired = session("old", Utc::now() - Duration::hours(1));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[expired]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let service = service_with(db);

        assert!(!service.validate("old").await.unwrap());
    }

    #[tokio::test]
    async fn test_validate_live_token_is_true() {
        let live = session("tok", Utc::now() + Duration::days(3));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[live]])
            .into_connection();
        let service = service_with(db);

        assert!(service.validate("tok").await.unwrap());
    }
}
