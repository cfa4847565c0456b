use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMMAND_IMEI: &str = "idx_command_imei";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Command::Table)
                    .if_not_exists()
                    .col(pk_auto(Command::Id))
                    .col(string(Command::Imei))
                    .col(string_len(Command::CommandType, 8))
                    .col(text(Command::CommandData))
                    .col(json_binary_null(Command::Parameters))
                    .col(string_len(Command::Status, 16).default("pending"))
                    .col(timestamp(Command::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_null(Command::SentAt))
                    .col(timestamp_null(Command::AcknowledgedAt))
                    .col(integer(Command::RetryCount).default(0))
                    .col(integer(Command::MaxRetries).default(3))
                    .col(integer(Command::TimeoutSeconds).default(30))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMAND_IMEI)
                    .table(Command::Table)
                    .col(Command::Imei)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMAND_IMEI)
                    .table(Command::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Command::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Command {
    Table,
    Id,
    Imei,
    CommandType,
    CommandData,
    Parameters,
    Status,
    CreatedAt,
    SentAt,
    AcknowledgedAt,
    RetryCount,
    MaxRetries,
    TimeoutSeconds,
}
