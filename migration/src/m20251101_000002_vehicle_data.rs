use sea_orm_migration::{prelude::*, schema::*};

static IDX_VEHICLE_DATA_IMEI_TIMESTAMP: &str = "idx_vehicle_data_imei_timestamp";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleData::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleData::Id))
                    .col(string(VehicleData::Imei))
                    .col(string_null(VehicleData::Longitude))
                    .col(string_null(VehicleData::Latitude))
                    .col(string_null(VehicleData::Altitude))
                    .col(string_null(VehicleData::Speed))
                    .col(boolean_null(VehicleData::Ignition))
                    .col(timestamp(VehicleData::Timestamp).default(Expr::current_timestamp()))
                    .col(string_null(VehicleData::DeviceTime))
                    .col(text_null(VehicleData::RawData))
                    .to_owned(),
            )
            .await?;

        // Telemetry is always read per device, newest first
        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_DATA_IMEI_TIMESTAMP)
                    .table(VehicleData::Table)
                    .col(VehicleData::Imei)
                    .col(VehicleData::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLE_DATA_IMEI_TIMESTAMP)
                    .table(VehicleData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VehicleData::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VehicleData {
    Table,
    Id,
    Imei,
    Longitude,
    Latitude,
    Altitude,
    Speed,
    Ignition,
    Timestamp,
    DeviceTime,
    RawData,
}
