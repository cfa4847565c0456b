//! Vehicle and telemetry queries.

use crate::{
    model::vehicle::{VehicleDataDto, VehicleDto},
    server::{
        data::TrackerStore,
        error::{vehicle::VehicleError, Error},
    },
};

/// Service for reading registered vehicles and their telemetry.
pub struct VehicleService<'a> {
    store: &'a dyn TrackerStore,
}

impl<'a> VehicleService<'a> {
    /// Creates a new instance of [`VehicleService`].
    pub fn new(store: &'a dyn TrackerStore) -> Self {
        Self { store }
    }

    /// Lists every registered vehicle.
    pub async fn list_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = self.store.list_vehicles().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Retrieves a single vehicle.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - Vehicle registered under the IMEI
    /// - `Err(Error::VehicleError(VehicleError::NotFound))` - No vehicle has the IMEI
    /// - `Err(Error::DbErr)` - Storage failure
    pub async fn get_vehicle(&self, imei: &str) -> Result<VehicleDto, Error> {
        match self.store.get_vehicle(imei).await? {
            Some(vehicle) => Ok(vehicle.into()),
            None => Err(VehicleError::NotFound(imei.to_string()).into()),
        }
    }

    /// Lists up to `limit` telemetry samples of a tracker, most recent first.
    ///
    /// Trackers without samples, registered or not, yield an empty list.
    pub async fn list_vehicle_data(
        &self,
        imei: &str,
        limit: u64,
    ) -> Result<Vec<VehicleDataDto>, Error> {
        let data = self.store.list_vehicle_data(imei, limit).await?;

        Ok(data.into_iter().map(VehicleDataDto::from).collect())
    }
}
