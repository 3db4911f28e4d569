//! Guest message entity.
//!
//! Sticky notes for the guest board and the US travel map. Guest messages
//! have no moderation gate: they pass the word filter at submission time and
//! go public immediately, so `status` is always `approved`. Admins can only
//! delete them outright.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Guest message model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "guest_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name of the guest.
    pub name: String,
    /// Message text, at most 140 characters.
    pub message: String,
    /// US state code placing the note on the travel map.
    pub state_id: Option<String>,
    /// Always "approved"; kept as a column for listing queries.
    pub status: String,
    /// When the message was posted.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
