//! Create forum_thread table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumThread::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForumThread::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ForumThread::Topic)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForumThread::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForumThread::Content).text().not_null())
                    .col(
                        ColumnDef::new(ForumThread::AuthorName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForumThread::AuthorEmail).string_len(255))
                    .col(
                        ColumnDef::new(ForumThread::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(ForumThread::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the public topic listing
        manager
            .create_index(
                Index::create()
                    .name("idx_forum_thread_topic")
                    .table(ForumThread::Table)
                    .col(ForumThread::Topic)
                    .col(ForumThread::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumThread::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ForumThread {
    Table,
    Id,
    Topic,
    Title,
    Content,
    AuthorName,
    AuthorEmail,
    Status,
    CreatedAt,
}
