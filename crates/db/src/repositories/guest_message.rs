//! Guest message repository.

use std::sync::Arc;

use crate::entities::{GuestMessage, guest_message};
use folio_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Number of messages returned by the public listing.
const PUBLIC_LIMIT: u64 = 50;

/// Guest message repository for database operations.
#[derive(Clone)]
pub struct GuestMessageRepository {
    db: Arc<DatabaseConnection>,
}

impl GuestMessageRepository {
    /// Create a new guest message repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a new message.
    pub async fn create(
        &self,
        model: guest_message::ActiveModel,
    ) -> AppResult<guest_message::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a message by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<guest_message::Model>> {
        GuestMessage::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get public messages, newest first, capped at 50.
    ///
    /// With a state filter the listing is restricted to that state; without
    /// one it covers every message placed on the map.
    pub async fn find_public(&self, state_id: Option<&str>) -> AppResult<Vec<guest_message::Model>> {
        let mut query = GuestMessage::find()
            .filter(guest_message::Column::Status.eq("approved"))
            .order_by_desc(guest_message::Column::CreatedAt)
            .limit(PUBLIC_LIMIT);

        query = match state_id {
            Some(state) => query.filter(guest_message::Column::StateId.eq(state)),
            None => query.filter(guest_message::Column::StateId.is_not_null()),
        };

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get every message, newest first, optionally filtered by state.
    pub async fn find_all(&self, state_id: Option<&str>) -> AppResult<Vec<guest_message::Model>> {
        let mut query = GuestMessage::find().order_by_desc(guest_message::Column::CreatedAt);

        if let Some(state) = state_id {
            query = query.filter(guest_message::Column::StateId.eq(state));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a message.
    pub async fn delete(&self, model: guest_message::Model) -> AppResult<()> {
        model
            .delete(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
