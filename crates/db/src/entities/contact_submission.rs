//! Contact form submission entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contact submission status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ContactStatus {
    #[sea_orm(string_value = "unread")]
    #[default]
    Unread,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Contact submission model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "contact_submission")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Sender display name.
    pub name: String,
    /// Sender address, required for replies.
    pub email: String,
    /// Optional subject line.
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
    /// Current status in the admin inbox.
    pub status: ContactStatus,
    /// When the submission arrived.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
