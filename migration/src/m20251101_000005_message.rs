use sea_orm_migration::{prelude::*, schema::*};

static IDX_MESSAGE_CPF: &str = "idx_message_cpf";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(string_null(Message::Cpf))
                    .col(string_null(Message::Imei))
                    .col(integer(Message::MessageTypeId))
                    .col(text(Message::Message))
                    .col(text_null(Message::MessageHtml))
                    .col(timestamp(Message::Timestamp).default(Expr::current_timestamp()))
                    .col(boolean(Message::Read).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGE_CPF)
                    .table(Message::Table)
                    .col(Message::Cpf)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MESSAGE_CPF)
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    Cpf,
    Imei,
    MessageTypeId,
    Message,
    MessageHtml,
    Timestamp,
    Read,
}
