//! Contact form service.

use chrono::Utc;
use folio_common::{AppError, AppResult, IdGenerator};
use folio_db::{
    entities::contact_submission::{self, ContactStatus},
    repositories::ContactRepository,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::services::EmailService;

/// Sentinel ID returned when the honeypot catches a submission.
pub const SPAM_BLOCKED_ID: &str = "spam-blocked";

/// Input for submitting the contact form.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    /// Hidden form field. Humans leave it empty; bots fill it in.
    pub honeypot: Option<String>,
}

/// Echo returned after a contact submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmitted {
    pub id: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

/// Contact form service.
#[derive(Clone)]
pub struct ContactService {
    contact_repo: ContactRepository,
    email_service: EmailService,
    id_gen: IdGenerator,
}

impl ContactService {
    /// Create a new contact service.
    #[must_use]
    pub const fn new(contact_repo: ContactRepository, email_service: EmailService) -> Self {
        Self {
            contact_repo,
            email_service,
            id_gen: IdGenerator::new(),
        }
    }

    /// Submit the contact form.
    ///
    /// A filled honeypot is silently accepted with a sentinel ID and writes
    /// nothing, so spammers get no signal. Real submissions are stored unread
    /// and the notification email goes out in the background.
    pub async fn submit(&self, mut input: SubmitContactInput) -> AppResult<ContactSubmitted> {
        input.subject = input.subject.take().filter(|s| !s.trim().is_empty());
        input.validate()?;

        if input.honeypot.as_deref().is_some_and(|h| !h.is_empty()) {
            return Ok(ContactSubmitted {
                id: SPAM_BLOCKED_ID.to_string(),
                created_at: Utc::now().into(),
            });
        }

        let model = contact_submission::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            subject: Set(input.subject.clone()),
            message: Set(input.message.clone()),
            status: Set(ContactStatus::Unread),
            created_at: Set(Utc::now().into()),
        };

        let created = self.contact_repo.create(model).await?;

        let email_service = self.email_service.clone();
        tokio::spawn(async move {
            if let Err(e) = email_service
                .send_contact_notification(
                    &input.name,
                    &input.email,
                    input.subject.as_deref(),
                    &input.message,
                )
                .await
            {
                error!(error = %e, "Contact notification failed");
            }
        });

        Ok(ContactSubmitted {
            id: created.id,
            created_at: created.created_at,
        })
    }

    /// List submissions for the admin surface, optionally filtered by status.
    pub async fn list_admin(
        &self,
        status: Option<ContactStatus>,
    ) -> AppResult<Vec<contact_submission::Model>> {
        self.contact_repo.find_by_status(status).await
    }

    /// Set a submission's status.
    pub async fn set_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> AppResult<contact_submission::Model> {
        let existing = self
            .contact_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact submission {id} not found")))?;

        let mut model: contact_submission::ActiveModel = existing.into();
        model.status = Set(status);

        self.contact_repo.update(model).await
    }

    /// Count unread submissions.
    pub async fn count_unread(&self) -> AppResult<u64> {
        self.contact_repo.count_unread().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use folio_common::config::MailConfig;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service_with(db: sea_orm::DatabaseConnection) -> ContactService {
        ContactService::new(
            ContactRepository::new(Arc::new(db)),
            EmailService::new(MailConfig::default(), "https://example.com".to_string()),
        )
    }

    fn valid_input() -> SubmitContactInput {
        SubmitContactInput {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "Hello there".to_string(),
            honeypot: None,
        }
    }

    #[tokio::test]
    async fn test_honeypot_writes_nothing() {
        // Mock has no prepared results, so any query would fail the test.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let mut input = valid_input();
        input.honeypot = Some("http://spam.example".to_string());

        let result = service.submit(input).await.unwrap();

        assert_eq!(result.id, SPAM_BLOCKED_ID);
    }

    #[tokio::test]
    async fn test_empty_honeypot_is_not_spam() {
        let created = contact_submission::Model {
            id: "s1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "Hello there".to_string(),
            status: ContactStatus::Unread,
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[created]])
            .into_connection();
        let service = service_with(db);

        let mut input = valid_input();
        input.honeypot = Some(String::new());

        let result = service.submit(input).await.unwrap();

        assert_eq!(result.id, "s1");
    }

    #[tokio::test]
    async fn test_submit_requires_valid_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = service_with(db);

        let mut input = valid_input();
        input.email = "nope".to_string();

        let result = service.submit(input).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
