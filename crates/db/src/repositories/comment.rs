//! Comment repository.

use std::sync::Arc;

use crate::entities::{
    Comment, ModerationStatus,
    comment::{self, CommentTarget},
};
use folio_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

/// Comment repository for database operations.
#[derive(Clone)]
pub struct CommentRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentRepository {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a new comment.
    pub async fn create(&self, model: comment::ActiveModel) -> AppResult<comment::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a comment by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<comment::Model>> {
        Comment::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get approved comments for a target, newest first.
    pub async fn find_for_target(
        &self,
        target_type: CommentTarget,
        target_slug: &str,
    ) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::TargetType.eq(target_type))
            .filter(comment::Column::TargetSlug.eq(target_slug))
            .filter(comment::Column::Status.eq(ModerationStatus::Approved))
            .order_by_desc(comment::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get comments with an optional status filter, newest first.
    pub async fn find_by_status(
        &self,
        status: Option<ModerationStatus>,
    ) -> AppResult<Vec<comment::Model>> {
        let mut query = Comment::find().order_by_desc(comment::Column::CreatedAt);

        if let Some(s) = status {
            query = query.filter(comment::Column::Status.eq(s));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a comment.
    pub async fn update(&self, model: comment::ActiveModel) -> AppResult<comment::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a comment.
    pub async fn delete(&self, model: comment::Model) -> AppResult<()> {
        model
            .delete(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Count comments awaiting moderation.
    pub async fn count_pending(&self) -> AppResult<u64> {
        Comment::find()
            .filter(comment::Column::Status.eq(ModerationStatus::Pending))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
