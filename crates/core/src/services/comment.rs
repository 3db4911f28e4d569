//! Comment service for work and print pages.

use chrono::Utc;
use folio_common::{AppError, AppResult, IdGenerator};
use folio_db::{
    entities::{ModerationStatus, comment},
    repositories::CommentRepository,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use folio_db::entities::comment::CommentTarget;

/// Input for creating a comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(length(min = 1, max = 100))]
    pub author_name: String,
    #[validate(email)]
    pub author_email: Option<String>,
    pub target_type: CommentTarget,
    #[validate(length(min = 1, max = 100))]
    pub target_slug: String,
}

/// Public-safe echo returned after creating a comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreated {
    pub id: String,
    pub content: String,
    pub status: ModerationStatus,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

/// Public projection of an approved comment.
///
/// Deliberately has no author email field; that stays on the admin surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicComment {
    pub id: String,
    pub content: String,
    pub author_name: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<comment::Model> for PublicComment {
    fn from(model: comment::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            author_name: model.author_name,
            created_at: model.created_at,
        }
    }
}

/// Comment service.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    id_gen: IdGenerator,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(comment_repo: CommentRepository) -> Self {
        Self {
            comment_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a comment. New comments start out pending moderation.
    pub async fn create(&self, mut input: CreateCommentInput) -> AppResult<CommentCreated> {
        input.author_email = input.author_email.take().filter(|e| !e.trim().is_empty());
        input.validate()?;

        let model = comment::ActiveModel {
            id: Set(self.id_gen.generate()),
            content: Set(input.content),
            author_name: Set(input.author_name),
            author_email: Set(input.author_email),
            target_type: Set(input.target_type),
            target_slug: Set(input.target_slug),
            status: Set(ModerationStatus::Pending),
            created_at: Set(Utc::now().into()),
        };

        let created = self.comment_repo.create(model).await?;

        Ok(CommentCreated {
            id: created.id,
            content: created.content,
            status: created.status,
            created_at: created.created_at,
        })
    }

    /// List approved comments for a target, newest first.
    pub async fn list_public(
        &self,
        target_type: CommentTarget,
        target_slug: &str,
    ) -> AppResult<Vec<PublicComment>> {
        let comments = self
            .comment_repo
            .find_for_target(target_type, target_slug)
            .await?;

        Ok(comments.into_iter().map(PublicComment::from).collect())
    }

    /// List comments for the admin surface, optionally filtered by status.
    pub async fn list_admin(
        &self,
        status: Option<ModerationStatus>,
    ) -> AppResult<Vec<comment::Model>> {
        self.comment_repo.find_by_status(status).await
    }

    /// Set a comment's moderation status.
    pub async fn set_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<comment::Model> {
        let existing = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))?;

        let mut model: comment::ActiveModel = existing.into();
        model.status = Set(status);

        self.comment_repo.update(model).await
    }

    /// Delete a comment.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let existing = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))?;

        self.comment_repo.delete(existing).await
    }

    /// Count comments awaiting moderation.
    pub async fn count_pending(&self) -> AppResult<u64> {
        self.comment_repo.count_pending().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service_with(db: sea_orm::DatabaseConnection) -> CommentService {
        CommentService::new(CommentRepository::new(Arc::new(db)))
    }

    fn empty_service() -> CommentService {
        service_with(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_content() {
        let service = empty_service();
        let result = service
            .create(CreateCommentInput {
                content: "x".repeat(2001),
                author_name: "Alice".to_string(),
                author_email: None,
                target_type: CommentTarget::Work,
                target_slug: "case-study".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        let service = empty_service();
        let result = service
            .create(CreateCommentInput {
                content: "Nice".to_string(),
                author_name: "Alice".to_string(),
                author_email: Some("not-an-email".to_string()),
                target_type: CommentTarget::Print,
                target_slug: "vase".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_treats_empty_email_as_absent() {
        let created = comment::Model {
            id: "c1".to_string(),
            content: "Nice".to_string(),
            author_name: "Alice".to_string(),
            author_email: None,
            target_type: CommentTarget::Work,
            target_slug: "case-study".to_string(),
            status: ModerationStatus::Pending,
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[created]])
            .into_connection();
        let service = service_with(db);

        let result = service
            .create(CreateCommentInput {
                content: "Nice".to_string(),
                author_name: "Alice".to_string(),
                author_email: Some(String::new()),
                target_type: CommentTarget::Work,
                target_slug: "case-study".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, ModerationStatus::Pending);
    }

    #[tokio::test]
    async fn test_set_status_missing_comment_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<comment::Model>::new()])
            .into_connection();
        let service = service_with(db);

        let result = service.set_status("missing", ModerationStatus::Approved).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
