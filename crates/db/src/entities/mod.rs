//! Database entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod admin_session;
pub mod coffee_chat_request;
pub mod comment;
pub mod contact_submission;
pub mod forum_reply;
pub mod forum_thread;
pub mod guest_message;

pub use admin_session::Entity as AdminSession;
pub use coffee_chat_request::Entity as CoffeeChatRequest;
pub use comment::Entity as Comment;
pub use contact_submission::Entity as ContactSubmission;
pub use forum_reply::Entity as ForumReply;
pub use forum_thread::Entity as ForumThread;
pub use guest_message::Entity as GuestMessage;

/// Moderation status shared by comments, forum threads, and forum replies.
///
/// Newly created submissions start out `pending` and only become publicly
/// visible once an admin sets them `approved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ModerationStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}
