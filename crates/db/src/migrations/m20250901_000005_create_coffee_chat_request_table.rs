//! Create coffee_chat_request table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoffeeChatRequest::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoffeeChatRequest::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CoffeeChatRequest::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CoffeeChatRequest::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CoffeeChatRequest::Company).string_len(100))
                    .col(ColumnDef::new(CoffeeChatRequest::Role).string_len(100))
                    .col(
                        ColumnDef::new(CoffeeChatRequest::Topic)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CoffeeChatRequest::PreferredTime).string_len(200))
                    .col(ColumnDef::new(CoffeeChatRequest::AdditionalNotes).text())
                    .col(
                        ColumnDef::new(CoffeeChatRequest::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(CoffeeChatRequest::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_coffee_chat_request_status")
                    .table(CoffeeChatRequest::Table)
                    .col(CoffeeChatRequest::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoffeeChatRequest::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CoffeeChatRequest {
    Table,
    Id,
    Name,
    Email,
    Company,
    Role,
    Topic,
    PreferredTime,
    AdditionalNotes,
    Status,
    CreatedAt,
}
