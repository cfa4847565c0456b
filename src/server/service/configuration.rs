//! Desired device configuration.

use crate::{
    model::configuration::{DeviceConfigurationDto, UpdateDeviceConfigurationDto},
    server::{
        data::{DesiredConfiguration, TrackerStore},
        error::Error,
        service::required,
    },
};

/// Service for reading and replacing the desired configuration of a tracker.
///
/// The stored configuration is only the operator's intent. Pushing it to a device happens through
/// the server and APN commands, and nothing here marks a configuration as applied.
pub struct ConfigurationService<'a> {
    store: &'a dyn TrackerStore,
}

impl<'a> ConfigurationService<'a> {
    /// Creates a new instance of [`ConfigurationService`].
    pub fn new(store: &'a dyn TrackerStore) -> Self {
        Self { store }
    }

    /// Returns the desired configuration, or `None` when none was ever saved.
    pub async fn get_configuration(
        &self,
        imei: &str,
    ) -> Result<Option<DeviceConfigurationDto>, Error> {
        let configuration = self.store.get_device_configuration(imei).await?;

        Ok(configuration.map(DeviceConfigurationDto::from))
    }

    /// Replaces the desired configuration of a tracker, creating it when absent.
    ///
    /// # Returns
    /// - `Ok(DeviceConfigurationDto)` - Stored configuration with a refreshed `updated_at`
    /// - `Err(Error::ValidationError)` - A required field is missing
    /// - `Err(Error::DbErr)` - Storage failure
    pub async fn update_configuration(
        &self,
        imei: &str,
        request: UpdateDeviceConfigurationDto,
    ) -> Result<DeviceConfigurationDto, Error> {
        let desired = DesiredConfiguration {
            server_ip: Some(required(request.server_ip, "serverIp")?),
            server_port: Some(required(request.server_port, "serverPort")?),
            server_domain: request.server_domain,
            apn_name: Some(required(request.apn_name, "apnName")?),
            apn_username: request.apn_username,
            apn_password: request.apn_password,
            report_interval: request.report_interval,
            heartbeat_interval: request.heartbeat_interval,
        };

        let configuration = self
            .store
            .upsert_device_configuration(imei, desired)
            .await?;

        Ok(configuration.into())
    }
}
