//! Create comment table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comment::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comment::Content).text().not_null())
                    .col(
                        ColumnDef::new(Comment::AuthorName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Comment::AuthorEmail).string_len(255))
                    .col(
                        ColumnDef::new(Comment::TargetType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comment::TargetSlug)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comment::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Comment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the public lookup by target + status
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_target")
                    .table(Comment::Table)
                    .col(Comment::TargetType)
                    .col(Comment::TargetSlug)
                    .col(Comment::Status)
                    .to_owned(),
            )
            .await?;

        // Index for the moderation queue
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_status")
                    .table(Comment::Table)
                    .col(Comment::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Comment {
    Table,
    Id,
    Content,
    AuthorName,
    AuthorEmail,
    TargetType,
    TargetSlug,
    Status,
    CreatedAt,
}
