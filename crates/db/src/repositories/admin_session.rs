//! Admin session repository.

use std::sync::Arc;

use crate::entities::{AdminSession, admin_session};
use folio_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
};

/// Admin session repository for database operations.
#[derive(Clone)]
pub struct AdminSessionRepository {
    db: Arc<DatabaseConnection>,
}

impl AdminSessionRepository {
    /// Create a new admin session repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a new session.
    pub async fn create(
        &self,
        model: admin_session::ActiveModel,
    ) -> AppResult<admin_session::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Look a session up by its token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<admin_session::Model>> {
        AdminSession::find()
            .filter(admin_session::Column::Token.eq(token))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a session.
    pub async fn delete(&self, model: admin_session::Model) -> AppResult<()> {
        model
            .delete(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete the session carrying a token, if one exists.
    pub async fn delete_by_token(&self, token: &str) -> AppResult<()> {
        AdminSession::delete_many()
            .filter(admin_session::Column::Token.eq(token))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_by_token() {
        let session = admin_session::Model {
            id: "s1".to_string(),
            token: "deadbeef".to_string(),
            expires_at: (Utc::now() + Duration::days(7)).into(),
            created_at: Utc::now().into(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[session]])
                .into_connection(),
        );

        let repo = AdminSessionRepository::new(db);
        let result = repo.find_by_token("deadbeef").await.unwrap();

        assert_eq!(result.map(|s| s.id), Some("s1".to_string()));
    }
}
