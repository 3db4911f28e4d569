//! Database repositories.
//!
//! One repository per aggregate. Repositories own the mapping from `DbErr`
//! to [`folio_common::AppError`] and expose the exact queries the services
//! need, nothing more.

mod admin_session;
mod coffee_chat;
mod comment;
mod contact;
mod forum;
mod guest_message;

pub use admin_session::AdminSessionRepository;
pub use coffee_chat::CoffeeChatRepository;
pub use comment::CommentRepository;
pub use contact::ContactRepository;
pub use forum::ForumRepository;
pub use guest_message::GuestMessageRepository;
