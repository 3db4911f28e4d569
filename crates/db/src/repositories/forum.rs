//! Forum repository for threads and replies.

use std::sync::Arc;

use crate::entities::{
    ForumReply, ForumThread, ModerationStatus,
    forum_reply,
    forum_thread::{self, ThreadTopic},
};
use folio_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Forum repository for database operations.
#[derive(Clone)]
pub struct ForumRepository {
    db: Arc<DatabaseConnection>,
}

impl ForumRepository {
    /// Create a new forum repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // ========== Threads ==========

    /// Insert a new thread.
    pub async fn create_thread(
        &self,
        model: forum_thread::ActiveModel,
    ) -> AppResult<forum_thread::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a thread by ID.
    pub async fn find_thread_by_id(&self, id: &str) -> AppResult<Option<forum_thread::Model>> {
        ForumThread::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get approved threads for a topic, newest first.
    pub async fn find_threads_by_topic(
        &self,
        topic: ThreadTopic,
    ) -> AppResult<Vec<forum_thread::Model>> {
        ForumThread::find()
            .filter(forum_thread::Column::Topic.eq(topic))
            .filter(forum_thread::Column::Status.eq(ModerationStatus::Approved))
            .order_by_desc(forum_thread::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get threads with an optional status filter, newest first.
    pub async fn find_threads_by_status(
        &self,
        status: Option<ModerationStatus>,
    ) -> AppResult<Vec<forum_thread::Model>> {
        let mut query = ForumThread::find().order_by_desc(forum_thread::Column::CreatedAt);

        if let Some(s) = status {
            query = query.filter(forum_thread::Column::Status.eq(s));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a thread.
    pub async fn update_thread(
        &self,
        model: forum_thread::ActiveModel,
    ) -> AppResult<forum_thread::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count threads awaiting moderation.
    pub async fn count_pending_threads(&self) -> AppResult<u64> {
        ForumThread::find()
            .filter(forum_thread::Column::Status.eq(ModerationStatus::Pending))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ========== Replies ==========

    /// Insert a new reply.
    pub async fn create_reply(
        &self,
        model: forum_reply::ActiveModel,
    ) -> AppResult<forum_reply::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a reply by ID.
    pub async fn find_reply_by_id(&self, id: &str) -> AppResult<Option<forum_reply::Model>> {
        ForumReply::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get approved replies for a thread, oldest first.
    pub async fn find_replies_for_thread(
        &self,
        thread_id: &str,
    ) -> AppResult<Vec<forum_reply::Model>> {
        ForumReply::find()
            .filter(forum_reply::Column::ThreadId.eq(thread_id))
            .filter(forum_reply::Column::Status.eq(ModerationStatus::Approved))
            .order_by_asc(forum_reply::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count approved replies for a thread.
    pub async fn count_replies_for_thread(&self, thread_id: &str) -> AppResult<u64> {
        ForumReply::find()
            .filter(forum_reply::Column::ThreadId.eq(thread_id))
            .filter(forum_reply::Column::Status.eq(ModerationStatus::Approved))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get replies with an optional status filter, newest first.
    pub async fn find_replies_by_status(
        &self,
        status: Option<ModerationStatus>,
    ) -> AppResult<Vec<forum_reply::Model>> {
        let mut query = ForumReply::find().order_by_desc(forum_reply::Column::CreatedAt);

        if let Some(s) = status {
            query = query.filter(forum_reply::Column::Status.eq(s));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a reply.
    pub async fn update_reply(
        &self,
        model: forum_reply::ActiveModel,
    ) -> AppResult<forum_reply::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count replies awaiting moderation.
    pub async fn count_pending_replies(&self) -> AppResult<u64> {
        ForumReply::find()
            .filter(forum_reply::Column::Status.eq(ModerationStatus::Pending))
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

    fn create_test_reply(id: &str, parent_id: Option<&str>) -> forum_reply::Model {
        forum_reply::Model {
            id: id.to_string(),
            thread_id: "thread1".to_string(),
            parent_id: parent_id.map(ToString::to_string),
            content: "A reply".to_string(),
            author_name: "Bob".to_string(),
            author_email: None,
            status: ModerationStatus::Pending,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_reply_by_id() {
        let reply = create_test_reply("r1", Some("r0"));

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[reply.clone()]])
                .into_connection(),
        );

        let repo = ForumRepository::new(db);
        let result = repo.find_reply_by_id("r1").await.unwrap();

        assert_eq!(result.map(|r| r.parent_id), Some(Some("r0".to_string())));
    }

    #[tokio::test]
    async fn test_find_thread_by_id_absent() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<forum_thread::Model>::new()])
                .into_connection(),
        );

        let repo = ForumRepository::new(db);
        let result = repo.find_thread_by_id("missing").await.unwrap();

        assert!(result.is_none());
    }
}
