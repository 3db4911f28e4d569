//! Comment entity.
//!
//! Comments attach to a case study or a print via the
//! `(target_type, target_slug)` pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::ModerationStatus;

/// What a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum CommentTarget {
    #[sea_orm(string_value = "work")]
    Work,
    #[sea_orm(string_value = "print")]
    Print,
}

/// Comment model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Comment body.
    pub content: String,
    /// Display name shown next to the comment.
    pub author_name: String,
    /// Contact address, never exposed through public read endpoints.
    pub author_email: Option<String>,
    /// Kind of content the comment is attached to.
    pub target_type: CommentTarget,
    /// Slug of the case study or print.
    pub target_slug: String,
    /// Current moderation status.
    pub status: ModerationStatus,
    /// When the comment was submitted.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
