//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250901_000001_create_comment_table;
mod m20250901_000002_create_forum_thread_table;
mod m20250901_000003_create_forum_reply_table;
mod m20250901_000004_create_contact_submission_table;
mod m20250901_000005_create_coffee_chat_request_table;
mod m20250901_000006_create_guest_message_table;
mod m20250901_000007_create_admin_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_comment_table::Migration),
            Box::new(m20250901_000002_create_forum_thread_table::Migration),
            Box::new(m20250901_000003_create_forum_reply_table::Migration),
            Box::new(m20250901_000004_create_contact_submission_table::Migration),
            Box::new(m20250901_000005_create_coffee_chat_request_table::Migration),
            Box::new(m20250901_000006_create_guest_message_table::Migration),
            Box::new(m20250901_000007_create_admin_session_table::Migration),
        ]
    }
}
