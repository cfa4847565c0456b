use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceConfiguration::Table)
                    .if_not_exists()
                    .col(pk_auto(DeviceConfiguration::Id))
                    .col(string_uniq(DeviceConfiguration::Imei))
                    .col(string_null(DeviceConfiguration::ServerIp))
                    .col(integer_null(DeviceConfiguration::ServerPort))
                    .col(string_null(DeviceConfiguration::ServerDomain))
                    .col(string_null(DeviceConfiguration::ApnName))
                    .col(string_null(DeviceConfiguration::ApnUsername))
                    .col(string_null(DeviceConfiguration::ApnPassword))
                    .col(integer_null(DeviceConfiguration::ReportInterval))
                    .col(integer_null(DeviceConfiguration::HeartbeatInterval))
                    .col(
                        timestamp(DeviceConfiguration::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_null(DeviceConfiguration::AppliedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceConfiguration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DeviceConfiguration {
    Table,
    Id,
    Imei,
    ServerIp,
    ServerPort,
    ServerDomain,
    ApnName,
    ApnUsername,
    ApnPassword,
    ReportInterval,
    HeartbeatInterval,
    UpdatedAt,
    AppliedAt,
}
