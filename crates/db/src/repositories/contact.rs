//! Contact submission repository.

use std::sync::Arc;

use crate::entities::{
    ContactSubmission,
    contact_submission::{self, ContactStatus},
};
use folio_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Contact submission repository for database operations.
#[derive(Clone)]
pub struct ContactRepository {
    db: Arc<DatabaseConnection>,
}

impl ContactRepository {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a new submission.
    pub async fn create(
        &self,
        model: contact_submission::ActiveModel,
    ) -> AppResult<contact_submission::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a submission by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<contact_submission::Model>> {
        ContactSubmission::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get submissions with an optional status filter, newest first.
    pub async fn find_by_status(
        &self,
        status: Option<ContactStatus>,
    ) -> AppResult<Vec<contact_submission::Model>> {
        let mut query =
            ContactSubmission::find().order_by_desc(contact_submission::Column::CreatedAt);

        if let Some(s) = status {
            query = query.filter(contact_submission::Column::Status.eq(s));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a submission.
    pub async fn update(
        &self,
        model: contact_submission::ActiveModel,
    ) -> AppResult<contact_submission::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count unread submissions.
    pub async fn count_unread(&self) -> AppResult<u64> {
        ContactSubmission::find()
            .filter(contact_submission::Column::Status.eq(ContactStatus::Unread))
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

    fn create_test_submission(id: &str, status: ContactStatus) -> contact_submission::Model {
        contact_submission::Model {
            id: id.to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            subject: None,
            message: "Hello there".to_string(),
            status,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_status_filtered() {
        let unread = create_test_submission("s1", ContactStatus::Unread);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[unread]])
                .into_connection(),
        );

        let repo = ContactRepository::new(db);
        let result = repo
            .find_by_status(Some(ContactStatus::Unread))
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, ContactStatus::Unread);
    }
}
