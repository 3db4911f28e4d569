//! Coffee chat request entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Coffee chat request status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CoffeeChatStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "declined")]
    Declined,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Coffee chat request model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "coffee_chat_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Requester display name.
    pub name: String,
    /// Requester address, required for scheduling.
    pub email: String,
    /// Optional company.
    pub company: Option<String>,
    /// Optional role.
    pub role: Option<String>,
    /// What the requester wants to talk about.
    pub topic: String,
    /// Optional preferred time window, free text.
    pub preferred_time: Option<String>,
    /// Optional additional notes.
    pub additional_notes: Option<String>,
    /// Current status of the request.
    pub status: CoffeeChatStatus,
    /// When the request arrived.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
