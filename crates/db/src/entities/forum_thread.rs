//! Forum thread entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::ModerationStatus;

/// Fixed set of discussion topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ThreadTopic {
    #[sea_orm(string_value = "ai-healthcare")]
    #[serde(rename = "ai-healthcare")]
    AiHealthcare,
    #[sea_orm(string_value = "3d-printing")]
    #[serde(rename = "3d-printing")]
    ThreeDPrinting,
    #[sea_orm(string_value = "sports")]
    #[serde(rename = "sports")]
    Sports,
}

/// Forum thread model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "forum_thread")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Topic category the thread belongs to.
    pub topic: ThreadTopic,
    /// Thread title.
    pub title: String,
    /// Opening post body.
    pub content: String,
    /// Display name of the author.
    pub author_name: String,
    /// Contact address, never exposed publicly.
    pub author_email: Option<String>,
    /// Current moderation status.
    pub status: ModerationStatus,
    /// When the thread was submitted.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
