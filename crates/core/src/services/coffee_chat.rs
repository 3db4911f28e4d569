//! Coffee chat request service.

use chrono::Utc;
use folio_common::{AppError, AppResult, IdGenerator};
use folio_db::{
    entities::coffee_chat_request::{self, CoffeeChatStatus},
    repositories::CoffeeChatRepository,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for submitting a coffee chat request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCoffeeChatInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(length(max = 100))]
    pub role: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub topic: String,
    #[validate(length(max = 200))]
    pub preferred_time: Option<String>,
    #[validate(length(max = 2000))]
    pub additional_notes: Option<String>,
}

/// Echo returned after submitting a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeChatSubmitted {
    pub id: String,
    pub status: CoffeeChatStatus,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

/// Coffee chat service.
#[derive(Clone)]
pub struct CoffeeChatService {
    coffee_repo: CoffeeChatRepository,
    id_gen: IdGenerator,
}

impl CoffeeChatService {
    /// Create a new coffee chat service.
    #[must_use]
    pub const fn new(coffee_repo: CoffeeChatRepository) -> Self {
        Self {
            coffee_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Submit a request. New requests start out pending.
    pub async fn submit(&self, mut input: SubmitCoffeeChatInput) -> AppResult<CoffeeChatSubmitted> {
        input.company = input.company.take().filter(|s| !s.trim().is_empty());
        input.role = input.role.take().filter(|s| !s.trim().is_empty());
        input.preferred_time = input.preferred_time.take().filter(|s| !s.trim().is_empty());
        input.additional_notes = input
            .additional_notes
            .take()
            .filter(|s| !s.trim().is_empty());
        input.validate()?;

        let model = coffee_chat_request::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name),
            email: Set(input.email),
            company: Set(input.company),
            role: Set(input.role),
            topic: Set(input.topic),
            preferred_time: Set(input.preferred_time),
            additional_notes: Set(input.additional_notes),
            status: Set(CoffeeChatStatus::Pending),
            created_at: Set(Utc::now().into()),
        };

        let created = self.coffee_repo.create(model).await?;

        Ok(CoffeeChatSubmitted {
            id: created.id,
            status: created.status,
            created_at: created.created_at,
        })
    }

    /// List requests for the admin surface, optionally filtered by status.
    pub async fn list_admin(
        &self,
        status: Option<CoffeeChatStatus>,
    ) -> AppResult<Vec<coffee_chat_request::Model>> {
        self.coffee_repo.find_by_status(status).await
    }

    /// Set a request's status. Any member of the status enum is a valid
    /// target; there is no transition graph.
    pub async fn set_status(
        &self,
        id: &str,
        status: CoffeeChatStatus,
    ) -> AppResult<coffee_chat_request::Model> {
        let existing = self
            .coffee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Coffee chat request {id} not found")))?;

        let mut model: coffee_chat_request::ActiveModel = existing.into();
        model.status = Set(status);

        self.coffee_repo.update(model).await
    }

    /// Count requests awaiting a response.
    pub async fn count_pending(&self) -> AppResult<u64> {
        self.coffee_repo.count_pending().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service_with(db: sea_orm::DatabaseConnection) -> CoffeeChatService {
        CoffeeChatService::new(CoffeeChatRepository::new(Arc::new(db)))
    }

    #[tokio::test]
    async fn test_submit_requires_topic() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let result = service
            .submit(SubmitCoffeeChatInput {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                company: None,
                role: None,
                topic: String::new(),
                preferred_time: None,
                additional_notes: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_set_status_accepts_completed() {
        let existing = coffee_chat_request::Model {
            id: "cc1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            company: None,
            role: None,
            topic: "Healthcare ML".to_string(),
            preferred_time: None,
            additional_notes: None,
            status: CoffeeChatStatus::Confirmed,
            created_at: Utc::now().into(),
        };
        let mut completed = existing.clone();
        completed.status = CoffeeChatStatus::Completed;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing]])
            .append_query_results([[completed]])
            .into_connection();
        let service = service_with(db);

        let result = service
            .set_status("cc1", CoffeeChatStatus::Completed)
            .await
            .unwrap();

        assert_eq!(result.status, CoffeeChatStatus::Completed);
    }
}
