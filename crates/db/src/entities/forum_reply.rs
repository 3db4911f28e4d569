//! Forum reply entity.
//!
//! A reply always belongs to a thread. It may additionally reference a
//! parent reply, but only one level deep: a reply whose parent itself has a
//! parent is rejected at creation time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::ModerationStatus;

/// Forum reply model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "forum_reply")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Thread this reply belongs to.
    pub thread_id: String,
    /// Parent reply for one level of nesting.
    pub parent_id: Option<String>,
    /// Reply body.
    pub content: String,
    /// Display name of the author.
    pub author_name: String,
    /// Contact address, never exposed publicly.
    pub author_email: Option<String>,
    /// Current moderation status.
    pub status: ModerationStatus,
    /// When the reply was submitted.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
