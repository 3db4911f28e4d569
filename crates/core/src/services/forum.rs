//! Forum service for discussion threads and replies.

use chrono::Utc;
use folio_common::{AppError, AppResult, IdGenerator};
use folio_db::{
    entities::{ModerationStatus, forum_reply, forum_thread},
    repositories::ForumRepository,
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use folio_db::entities::forum_thread::ThreadTopic;

/// Input for creating a thread.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadInput {
    pub topic: ThreadTopic,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
    #[validate(length(min = 1, max = 100))]
    pub author_name: String,
    #[validate(email)]
    pub author_email: Option<String>,
}

/// Input for creating a reply on a thread.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyInput {
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    #[validate(length(min = 1, max = 100))]
    pub author_name: String,
    #[validate(email)]
    pub author_email: Option<String>,
    pub parent_id: Option<String>,
}

/// Public-safe echo returned after creating a thread.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadCreated {
    pub id: String,
    pub title: String,
    pub status: ModerationStatus,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

/// Public-safe echo returned after creating a reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCreated {
    pub id: String,
    pub content: String,
    pub status: ModerationStatus,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

/// Approved thread in a topic listing, with its approved reply count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    pub reply_count: u64,
}

/// Public projection of an approved reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicReply {
    pub id: String,
    pub content: String,
    pub author_name: String,
    pub parent_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<forum_reply::Model> for PublicReply {
    fn from(model: forum_reply::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            author_name: model.author_name,
            parent_id: model.parent_id,
            created_at: model.created_at,
        }
    }
}

/// Approved thread with its approved replies, oldest reply first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetail {
    pub id: String,
    pub topic: ThreadTopic,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    pub replies: Vec<PublicReply>,
}

/// Result of a moderation update on a thread or reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeratedItem {
    pub id: String,
    pub status: ModerationStatus,
}

/// Forum service.
#[derive(Clone)]
pub struct ForumService {
    forum_repo: ForumRepository,
    id_gen: IdGenerator,
}

impl ForumService {
    /// Create a new forum service.
    #[must_use]
    pub const fn new(forum_repo: ForumRepository) -> Self {
        Self {
            forum_repo,
            id_gen: IdGenerator::new(),
        }
    }

    // ========== Public surface ==========

    /// Create a thread. New threads start out pending moderation.
    pub async fn create_thread(&self, mut input: CreateThreadInput) -> AppResult<ThreadCreated> {
        input.author_email = input.author_email.take().filter(|e| !e.trim().is_empty());
        input.validate()?;

        let model = forum_thread::ActiveModel {
            id: Set(self.id_gen.generate()),
            topic: Set(input.topic),
            title: Set(input.title),
            content: Set(input.content),
            author_name: Set(input.author_name),
            author_email: Set(input.author_email),
            status: Set(ModerationStatus::Pending),
            created_at: Set(Utc::now().into()),
        };

        let created = self.forum_repo.create_thread(model).await?;

        Ok(ThreadCreated {
            id: created.id,
            title: created.title,
            status: created.status,
            created_at: created.created_at,
        })
    }

    /// List approved threads in a topic, newest first, with reply counts.
    pub async fn list_threads(&self, topic: ThreadTopic) -> AppResult<Vec<ThreadSummary>> {
        let threads = self.forum_repo.find_threads_by_topic(topic).await?;

        let mut summaries = Vec::with_capacity(threads.len());
        for thread in threads {
            let reply_count = self.forum_repo.count_replies_for_thread(&thread.id).await?;
            summaries.push(ThreadSummary {
                id: thread.id,
                title: thread.title,
                content: thread.content,
                author_name: thread.author_name,
                created_at: thread.created_at,
                reply_count,
            });
        }

        Ok(summaries)
    }

    /// Get an approved thread with its approved replies, oldest reply first.
    pub async fn get_thread(&self, id: &str) -> AppResult<ThreadDetail> {
        let thread = self
            .forum_repo
            .find_thread_by_id(id)
            .await?
            .filter(|t| t.status == ModerationStatus::Approved)
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))?;

        let replies = self.forum_repo.find_replies_for_thread(&thread.id).await?;

        Ok(ThreadDetail {
            id: thread.id,
            topic: thread.topic,
            title: thread.title,
            content: thread.content,
            author_name: thread.author_name,
            created_at: thread.created_at,
            replies: replies.into_iter().map(PublicReply::from).collect(),
        })
    }

    /// Create a reply on a thread. New replies start out pending moderation.
    ///
    /// The thread must exist, and when `parent_id` is given the parent reply
    /// must exist and be a top level reply. Nesting is capped at two levels,
    /// checked before anything is written.
    pub async fn create_reply(
        &self,
        thread_id: &str,
        mut input: CreateReplyInput,
    ) -> AppResult<ReplyCreated> {
        input.author_email = input.author_email.take().filter(|e| !e.trim().is_empty());
        input.validate()?;

        self.forum_repo
            .find_thread_by_id(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))?;

        if let Some(parent_id) = &input.parent_id {
            let parent = self
                .forum_repo
                .find_reply_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Parent reply not found".to_string()))?;

            if parent.parent_id.is_some() {
                return Err(AppError::InvalidNesting);
            }
        }

        let model = forum_reply::ActiveModel {
            id: Set(self.id_gen.generate()),
            thread_id: Set(thread_id.to_string()),
            parent_id: Set(input.parent_id),
            content: Set(input.content),
            author_name: Set(input.author_name),
            author_email: Set(input.author_email),
            status: Set(ModerationStatus::Pending),
            created_at: Set(Utc::now().into()),
        };

        let created = self.forum_repo.create_reply(model).await?;

        Ok(ReplyCreated {
            id: created.id,
            content: created.content,
            status: created.status,
            created_at: created.created_at,
        })
    }

    // ========== Admin surface ==========

    /// List threads for the admin surface, optionally filtered by status.
    pub async fn list_threads_admin(
        &self,
        status: Option<ModerationStatus>,
    ) -> AppResult<Vec<forum_thread::Model>> {
        self.forum_repo.find_threads_by_status(status).await
    }

    /// List replies for the admin surface, optionally filtered by status.
    pub async fn list_replies_admin(
        &self,
        status: Option<ModerationStatus>,
    ) -> AppResult<Vec<forum_reply::Model>> {
        self.forum_repo.find_replies_by_status(status).await
    }

    /// Set a thread's moderation status.
    pub async fn set_thread_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<ModeratedItem> {
        let existing = self
            .forum_repo
            .find_thread_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Thread {id} not found")))?;

        let mut model: forum_thread::ActiveModel = existing.into();
        model.status = Set(status);
        let updated = self.forum_repo.update_thread(model).await?;

        Ok(ModeratedItem {
            id: updated.id,
            status: updated.status,
        })
    }

    /// Set a reply's moderation status.
    pub async fn set_reply_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<ModeratedItem> {
        let existing = self
            .forum_repo
            .find_reply_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reply {id} not found")))?;

        let mut model: forum_reply::ActiveModel = existing.into();
        model.status = Set(status);
        let updated = self.forum_repo.update_reply(model).await?;

        Ok(ModeratedItem {
            id: updated.id,
            status: updated.status,
        })
    }

    /// Set the moderation status of an item that may be a thread or a reply.
    ///
    /// Looks the ID up as a thread first, then as a reply; an ID matching
    /// neither is a not-found, never a server error.
    pub async fn moderate_item(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<ModeratedItem> {
        if let Some(thread) = self.forum_repo.find_thread_by_id(id).await? {
            let mut model: forum_thread::ActiveModel = thread.into();
            model.status = Set(status);
            let updated = self.forum_repo.update_thread(model).await?;
            return Ok(ModeratedItem {
                id: updated.id,
                status: updated.status,
            });
        }

        if let Some(reply) = self.forum_repo.find_reply_by_id(id).await? {
            let mut model: forum_reply::ActiveModel = reply.into();
            model.status = Set(status);
            let updated = self.forum_repo.update_reply(model).await?;
            return Ok(ModeratedItem {
                id: updated.id,
                status: updated.status,
            });
        }

        Err(AppError::NotFound(format!("Forum item {id} not found")))
    }

    /// Count threads awaiting moderation.
    pub async fn count_pending_threads(&self) -> AppResult<u64> {
        self.forum_repo.count_pending_threads().await
    }

    /// Count replies awaiting moderation.
    pub async fn count_pending_replies(&self) -> AppResult<u64> {
        self.forum_repo.count_pending_replies().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service_with(db: sea_orm::DatabaseConnection) -> ForumService {
        ForumService::new(ForumRepository::new(Arc::new(db)))
    }

    fn test_thread(id: &str, status: ModerationStatus) -> forum_thread::Model {
        forum_thread::Model {
            id: id.to_string(),
            topic: ThreadTopic::Sports,
            title: "Pickup game strategy".to_string(),
            content: "Thoughts on zone defense?".to_string(),
            author_name: "Alice".to_string(),
            author_email: None,
            status,
            created_at: Utc::now().into(),
        }
    }

    fn test_reply(id: &str, parent_id: Option<&str>) -> forum_reply::Model {
        forum_reply::Model {
            id: id.to_string(),
            thread_id: "t1".to_string(),
            parent_id: parent_id.map(ToString::to_string),
            content: "Zone works until they shoot well".to_string(),
            author_name: "Bob".to_string(),
            author_email: None,
            status: ModerationStatus::Pending,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_get_thread_hides_pending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_thread("t1", ModerationStatus::Pending)]])
            .into_connection();
        let service = service_with(db);

        let result = service.get_thread("t1").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_reply_missing_thread_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<forum_thread::Model>::new()])
            .into_connection();
        let service = service_with(db);

        let result = service
            .create_reply(
                "missing",
                CreateReplyInput {
                    content: "Hello".to_string(),
                    author_name: "Bob".to_string(),
                    author_email: None,
                    parent_id: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_reply_rejects_third_nesting_level() {
        // Thread exists; parent reply already has a parent of its own.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[test_thread("t1", ModerationStatus::Approved)]])
            .append_query_results([[test_reply("r2", Some("r1"))]])
            .into_connection();
        let service = service_with(db);

        let result = service
            .create_reply(
                "t1",
                CreateReplyInput {
                    content: "Too deep".to_string(),
                    author_name: "Bob".to_string(),
                    author_email: None,
                    parent_id: Some("r2".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidNesting)));
    }

    #[tokio::test]
    async fn test_moderate_item_unknown_id_is_not_found() {
        // Neither a thread nor a reply matches the ID.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<forum_thread::Model>::new()])
            .append_query_results([Vec::<forum_reply::Model>::new()])
            .into_connection();
        let service = service_with(db);

        let result = service
            .moderate_item("missing", ModerationStatus::Approved)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_moderate_item_falls_through_to_reply() {
        let reply = test_reply("r1", None);
        let mut approved = reply.clone();
        approved.status = ModerationStatus::Approved;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<forum_thread::Model>::new()])
            .append_query_results([[reply]])
            .append_query_results([[approved]])
            .into_connection();
        let service = service_with(db);

        let result = service
            .moderate_item("r1", ModerationStatus::Approved)
            .await
            .unwrap();

        assert_eq!(result.id, "r1");
        assert_eq!(result.status, ModerationStatus::Approved);
    }
}
