//! Coffee chat request repository.

use std::sync::Arc;

use crate::entities::{
    CoffeeChatRequest,
    coffee_chat_request::{self, CoffeeChatStatus},
};
use folio_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Coffee chat request repository for database operations.
#[derive(Clone)]
pub struct CoffeeChatRepository {
    db: Arc<DatabaseConnection>,
}

impl CoffeeChatRepository {
    /// Create a new coffee chat repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a new request.
    pub async fn create(
        &self,
        model: coffee_chat_request::ActiveModel,
    ) -> AppResult<coffee_chat_request::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a request by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<coffee_chat_request::Model>> {
        CoffeeChatRequest::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get requests with an optional status filter, newest first.
    pub async fn find_by_status(
        &self,
        status: Option<CoffeeChatStatus>,
    ) -> AppResult<Vec<coffee_chat_request::Model>> {
        let mut query =
            CoffeeChatRequest::find().order_by_desc(coffee_chat_request::Column::CreatedAt);

        if let Some(s) = status {
            query = query.filter(coffee_chat_request::Column::Status.eq(s));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a request.
    pub async fn update(
        &self,
        model: coffee_chat_request::ActiveModel,
    ) -> AppResult<coffee_chat_request::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count requests awaiting a response.
    pub async fn count_pending(&self) -> AppResult<u64> {
        CoffeeChatRequest::find()
            .filter(coffee_chat_request::Column::Status.eq(CoffeeChatStatus::Pending))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_request(id: &str, status: CoffeeChatStatus) -> coffee_chat_request::Model {
        coffee_chat_request::Model {
            id: id.to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            company: Some("Acme".to_string()),
            role: None,
            topic: "Healthcare ML".to_string(),
            preferred_time: None,
            additional_notes: None,
            status,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let request = create_test_request("cc1", CoffeeChatStatus::Confirmed);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[request]])
                .into_connection(),
        );

        let repo = CoffeeChatRepository::new(db);
        let result = repo.find_by_id("cc1").await.unwrap();

        assert_eq!(result.map(|r| r.status), Some(CoffeeChatStatus::Confirmed));
    }
}
