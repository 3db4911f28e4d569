//! Admin session entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin session model.
///
/// A bearer token with a fixed expiry, stored server side and carried by the
/// admin cookie. Expired sessions are deleted on first use past expiry.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "admin_session")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Session token carried by the cookie.
    #[sea_orm(unique)]
    pub token: String,
    /// When the session stops being valid.
    pub expires_at: DateTimeWithTimeZone,
    /// When the session was created.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
