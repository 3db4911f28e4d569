//! Create guest_message table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuestMessage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuestMessage::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GuestMessage::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuestMessage::Message)
                            .string_len(140)
                            .not_null(),
                    )
                    .col(ColumnDef::new(GuestMessage::StateId).string_len(8))
                    .col(
                        ColumnDef::new(GuestMessage::Status)
                            .string_len(16)
                            .not_null()
                            .default("approved"),
                    )
                    .col(
                        ColumnDef::new(GuestMessage::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the travel map lookup by state
        manager
            .create_index(
                Index::create()
                    .name("idx_guest_message_state_id")
                    .table(GuestMessage::Table)
                    .col(GuestMessage::StateId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuestMessage::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GuestMessage {
    Table,
    Id,
    Name,
    Message,
    StateId,
    Status,
    CreatedAt,
}
