use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        command::{CommandRepository, NewCommand},
        device_configuration::{DesiredConfiguration, DeviceConfigurationRepository},
        message::MessageRepository,
        vehicle::VehicleRepository,
        vehicle_data::VehicleDataRepository,
    },
    model::db::{
        CommandModel, DeviceConfigurationModel, MessageModel, VehicleDataModel, VehicleModel,
    },
};

/// Storage capabilities required by the tracker services
///
/// Implementations must be shareable across request handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerStore: Send + Sync {
    /// List every registered vehicle
    async fn list_vehicles(&self) -> Result<Vec<VehicleModel>, DbErr>;

    /// Get a vehicle by its IMEI
    async fn get_vehicle(&self, imei: &str) -> Result<Option<VehicleModel>, DbErr>;

    /// List up to `limit` telemetry samples of a tracker, most recent first
    async fn list_vehicle_data(
        &self,
        imei: &str,
        limit: u64,
    ) -> Result<Vec<VehicleDataModel>, DbErr>;

    /// Store an encoded command
    async fn create_command(&self, command: NewCommand) -> Result<CommandModel, DbErr>;

    /// List the commands of a tracker, most recent first
    async fn list_commands(&self, imei: &str) -> Result<Vec<CommandModel>, DbErr>;

    /// Store a block command and flag its vehicle as awaiting delivery, atomically
    ///
    /// Either both writes persist or neither does. The vehicle is `None` when no vehicle is
    /// registered under the command's IMEI; the command is stored regardless.
    async fn queue_block_command(
        &self,
        command: NewCommand,
    ) -> Result<(CommandModel, Option<VehicleModel>), DbErr>;

    /// Get the desired configuration of a tracker
    async fn get_device_configuration(
        &self,
        imei: &str,
    ) -> Result<Option<DeviceConfigurationModel>, DbErr>;

    /// Insert or replace the desired configuration of a tracker
    async fn upsert_device_configuration(
        &self,
        imei: &str,
        desired: DesiredConfiguration,
    ) -> Result<DeviceConfigurationModel, DbErr>;

    /// List up to `limit` messages addressed to an owner, most recent first
    async fn list_messages(&self, cpf: &str, limit: u64) -> Result<Vec<MessageModel>, DbErr>;
}

/// [`TrackerStore`] backed by the SeaORM repositories
#[derive(Clone)]
pub struct DbTrackerStore {
    db: DatabaseConnection,
}

impl DbTrackerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrackerStore for DbTrackerStore {
    async fn list_vehicles(&self) -> Result<Vec<VehicleModel>, DbErr> {
        VehicleRepository::new(&self.db).get_all().await
    }

    async fn get_vehicle(&self, imei: &str) -> Result<Option<VehicleModel>, DbErr> {
        VehicleRepository::new(&self.db).get_by_imei(imei).await
    }

    async fn list_vehicle_data(
        &self,
        imei: &str,
        limit: u64,
    ) -> Result<Vec<VehicleDataModel>, DbErr> {
        VehicleDataRepository::new(&self.db)
            .get_latest_by_imei(imei, limit)
            .await
    }

    async fn create_command(&self, command: NewCommand) -> Result<CommandModel, DbErr> {
        CommandRepository::new(&self.db).create(command).await
    }

    async fn list_commands(&self, imei: &str) -> Result<Vec<CommandModel>, DbErr> {
        CommandRepository::new(&self.db).get_by_imei(imei).await
    }

    async fn queue_block_command(
        &self,
        command: NewCommand,
    ) -> Result<(CommandModel, Option<VehicleModel>), DbErr> {
        let imei = command.imei.clone();
        let txn = self.db.begin().await?;

        let command = CommandRepository::new(&txn).create(command).await?;
        let vehicle = VehicleRepository::new(&txn)
            .set_block_command_pending(&imei)
            .await?;

        txn.commit().await?;

        Ok((command, vehicle))
    }

    async fn get_device_configuration(
        &self,
        imei: &str,
    ) -> Result<Option<DeviceConfigurationModel>, DbErr> {
        DeviceConfigurationRepository::new(&self.db)
            .get_by_imei(imei)
            .await
    }

    async fn upsert_device_configuration(
        &self,
        imei: &str,
        desired: DesiredConfiguration,
    ) -> Result<DeviceConfigurationModel, DbErr> {
        DeviceConfigurationRepository::new(&self.db)
            .upsert(imei, desired)
            .await
    }

    async fn list_messages(&self, cpf: &str, limit: u64) -> Result<Vec<MessageModel>, DbErr> {
        MessageRepository::new(&self.db).get_by_cpf(cpf, limit).await
    }
}
