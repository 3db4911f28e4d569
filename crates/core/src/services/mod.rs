//! Business logic services.
//!
//! Services sit between the HTTP layer and the repositories. They own
//! validation, the moderation rules, and notification dispatch; repositories
//! own the queries.

pub mod coffee_chat;
pub mod comment;
pub mod contact;
pub mod email;
pub mod forum;
pub mod guest_message;
pub mod session;
pub mod word_filter;

pub use coffee_chat::CoffeeChatService;
pub use comment::CommentService;
pub use contact::ContactService;
pub use email::EmailService;
pub use forum::ForumService;
pub use guest_message::GuestMessageService;
pub use session::SessionService;
