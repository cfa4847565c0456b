use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_uniq(Vehicle::Imei))
                    .col(string_null(Vehicle::Cpf))
                    .col(string_null(Vehicle::Plate))
                    .col(boolean_null(Vehicle::Ignition))
                    .col(boolean(Vehicle::Blocked).default(false))
                    .col(boolean(Vehicle::BlockCommandPending).default(false))
                    .col(boolean(Vehicle::BlockWarningSent).default(false))
                    .col(string_null(Vehicle::TrackerModel))
                    .col(string_null(Vehicle::TrackerPassword))
                    .col(string_len(Vehicle::Status, 16).default("offline"))
                    .col(timestamp_null(Vehicle::LastSeen))
                    .col(timestamp(Vehicle::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Imei,
    Cpf,
    Plate,
    Ignition,
    Blocked,
    BlockCommandPending,
    BlockWarningSent,
    TrackerModel,
    TrackerPassword,
    Status,
    LastSeen,
    CreatedAt,
}
