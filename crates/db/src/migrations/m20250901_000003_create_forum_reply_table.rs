//! Create forum_reply table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumReply::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForumReply::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ForumReply::ThreadId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForumReply::ParentId).string_len(32))
                    .col(ColumnDef::new(ForumReply::Content).text().not_null())
                    .col(
                        ColumnDef::new(ForumReply::AuthorName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForumReply::AuthorEmail).string_len(255))
                    .col(
                        ColumnDef::new(ForumReply::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(ForumReply::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_reply_thread")
                            .from(ForumReply::Table, ForumReply::ThreadId)
                            .to(ForumThread::Table, ForumThread::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_reply_parent")
                            .from(ForumReply::Table, ForumReply::ParentId)
                            .to(ForumReply::Table, ForumReply::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for fetching a thread's replies
        manager
            .create_index(
                Index::create()
                    .name("idx_forum_reply_thread_id")
                    .table(ForumReply::Table)
                    .col(ForumReply::ThreadId)
                    .to_owned(),
            )
            .await?;

        // Index for the moderation queue
        manager
            .create_index(
                Index::create()
                    .name("idx_forum_reply_status")
                    .table(ForumReply::Table)
                    .col(ForumReply::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumReply::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ForumReply {
    Table,
    Id,
    ThreadId,
    ParentId,
    Content,
    AuthorName,
    AuthorEmail,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum ForumThread {
    Table,
    Id,
}
