//! Tracker record insertion.

use sea_orm::EntityTrait;

use crate::{
    error::TestError,
    fixtures::tracker::{factory, TrackerFixtures},
    model::{DeviceConfigurationModel, MessageModel, VehicleDataModel, VehicleModel},
};

impl<'a> TrackerFixtures<'a> {
    pub async fn insert_mock_vehicle(&self, imei: &str) -> Result<VehicleModel, TestError> {
        Ok(entity::prelude::Vehicle::insert(factory::mock_vehicle(imei))
            .exec_with_returning(&self.context.db)
            .await?)
    }

    /// Insert `count` samples with strictly increasing timestamps.
    pub async fn insert_mock_telemetry(
        &self,
        imei: &str,
        count: usize,
    ) -> Result<Vec<VehicleDataModel>, TestError> {
        let base = factory::base_time();
        let mut samples = Vec::with_capacity(count);

        for index in 0..count {
            let sample = entity::prelude::VehicleData::insert(factory::mock_telemetry(
                imei, index, base,
            ))
            .exec_with_returning(&self.context.db)
            .await?;

            samples.push(sample);
        }

        Ok(samples)
    }

    pub async fn insert_mock_messages(
        &self,
        cpf: &str,
        count: usize,
    ) -> Result<Vec<MessageModel>, TestError> {
        let base = factory::base_time();
        let mut messages = Vec::with_capacity(count);

        for index in 0..count {
            let message =
                entity::prelude::Message::insert(factory::mock_message(cpf, index, base))
                    .exec_with_returning(&self.context.db)
                    .await?;

            messages.push(message);
        }

        Ok(messages)
    }

    pub async fn insert_mock_configuration(
        &self,
        imei: &str,
    ) -> Result<DeviceConfigurationModel, TestError> {
        Ok(
            entity::prelude::DeviceConfiguration::insert(factory::mock_configuration(imei))
                .exec_with_returning(&self.context.db)
                .await?,
        )
    }
}
