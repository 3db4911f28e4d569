//! Guest message service for the travel map board.

use chrono::Utc;
use folio_common::{AppError, AppResult, IdGenerator};
use folio_db::{entities::guest_message, repositories::GuestMessageRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

use crate::services::{EmailService, word_filter};

/// Input for posting a guest message.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestMessageInput {
    #[validate(length(min = 1, max = 50, message = "Name must be 50 characters or less"))]
    pub name: String,
    #[validate(length(min = 1, max = 140, message = "Message must be 140 characters or less"))]
    pub message: String,
    pub state_id: Option<String>,
}

/// Guest message service.
///
/// Guest messages skip the moderation queue: they are checked against the
/// word filter at submission time and go public immediately.
#[derive(Clone)]
pub struct GuestMessageService {
    message_repo: GuestMessageRepository,
    email_service: EmailService,
    id_gen: IdGenerator,
}

impl GuestMessageService {
    /// Create a new guest message service.
    #[must_use]
    pub const fn new(message_repo: GuestMessageRepository, email_service: EmailService) -> Self {
        Self {
            message_repo,
            email_service,
            id_gen: IdGenerator::new(),
        }
    }

    /// Post a guest message.
    ///
    /// Name and message are trimmed, length checked, and run through the word
    /// filter before anything is written. The stored message is auto-approved
    /// and the map notification email goes out in the background.
    pub async fn create(
        &self,
        mut input: CreateGuestMessageInput,
    ) -> AppResult<guest_message::Model> {
        input.name = input.name.trim().to_string();
        input.message = input.message.trim().to_string();
        input.state_id = input.state_id.take().filter(|s| !s.trim().is_empty());
        input.validate()?;

        let name_check = word_filter::check_name(&input.name);
        if let Some(reason) = name_check.reason {
            return Err(AppError::BadRequest(reason));
        }

        let message_check = word_filter::check_message(&input.message);
        if let Some(reason) = message_check.reason {
            return Err(AppError::BadRequest(reason));
        }

        let model = guest_message::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name.clone()),
            message: Set(input.message.clone()),
            state_id: Set(input.state_id.clone()),
            status: Set("approved".to_string()),
            created_at: Set(Utc::now().into()),
        };

        let created = self.message_repo.create(model).await?;

        let email_service = self.email_service.clone();
        tokio::spawn(async move {
            if let Err(e) = email_service
                .send_guest_message_notification(
                    &input.name,
                    &input.message,
                    input.state_id.as_deref(),
                )
                .await
            {
                error!(error = %e, "Guest message notification failed");
            }
        });

        Ok(created)
    }

    /// List public messages, newest first, capped at 50.
    ///
    /// Filtered to one state when `state_id` is given, otherwise to messages
    /// placed on the map.
    pub async fn list_public(
        &self,
        state_id: Option<&str>,
    ) -> AppResult<Vec<guest_message::Model>> {
        self.message_repo.find_public(state_id).await
    }

    /// List every message for the admin surface, newest first, optionally
    /// filtered by state.
    pub async fn list_admin(&self, state_id: Option<&str>) -> AppResult<Vec<guest_message::Model>> {
        self.message_repo.find_all(state_id).await
    }

    /// Delete a message.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let existing = self
            .message_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guest message {id} not found")))?;

        self.message_repo.delete(existing).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use folio_common::config::MailConfig;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service_with(db: sea_orm::DatabaseConnection) -> GuestMessageService {
        GuestMessageService::new(
            GuestMessageRepository::new(Arc::new(db)),
            EmailService::new(MailConfig::default(), "https://example.com".to_string()),
        )
    }

    #[tokio::test]
    async fn test_create_rejects_filtered_message() {
        // No prepared mock results, so the rejection must happen before any write.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let result = service
            .create(CreateGuestMessageInput {
                name: "Alice".to_string(),
                message: "get fr33 m0n3y here".to_string(),
                state_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_filtered_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let result = service
            .create(CreateGuestMessageInput {
                name: "b1tch".to_string(),
                message: "Hello from Denver".to_string(),
                state_id: Some("CO".to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let result = service
            .create(CreateGuestMessageInput {
                name: "Alice".to_string(),
                message: "x".repeat(141),
                state_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_trims_and_stores_approved() {
        let created = guest_message::Model {
            id: "g1".to_string(),
            name: "Alice".to_string(),
            message: "Hello from Denver".to_string(),
            state_id: Some("CO".to_string()),
            status: "approved".to_string(),
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[created]])
            .into_connection();
        let service = service_with(db);

        let result = service
            .create(CreateGuestMessageInput {
                name: "  Alice  ".to_string(),
                message: " Hello from Denver ".to_string(),
                state_id: Some("CO".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.status, "approved");
    }
}
