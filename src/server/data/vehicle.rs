use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every registered vehicle ordered by registration
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_imei(&self, imei: &str) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Imei.eq(imei))
            .one(self.db)
            .await
    }

    /// Flags the vehicle as having a block command waiting for delivery
    ///
    /// Returns `Ok(None)` when no vehicle is registered under the IMEI.
    pub async fn set_block_command_pending(
        &self,
        imei: &str,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let vehicle = match self.get_by_imei(imei).await? {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.block_command_pending = ActiveValue::Set(true);

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }
}

#[cfg(test)]
mod tests {

    mod get_all {
        use trackhub_test_utils::prelude::*;

        use crate::server::data::vehicle::VehicleRepository;

        /// Expect vehicles in insertion order
        #[tokio::test]
        async fn returns_vehicles_in_id_order() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_tracker_tables()
                .with_mock_vehicle("864696060000002")
                .with_mock_vehicle("864696060000001")
                .build()
                .await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_all().await?;

            let imeis: Vec<&str> = result.iter().map(|v| v.imei.as_str()).collect();
            assert_eq!(imeis, vec!["864696060000002", "864696060000001"]);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_all().await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_imei {
        use trackhub_test_utils::prelude::*;

        use crate::server::data::vehicle::VehicleRepository;

        /// Expect Ok(Some(_)) when the vehicle exists
        #[tokio::test]
        async fn finds_existing_vehicle() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_tracker_tables()
                .with_mock_vehicle("864696060000001")
                .build()
                .await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_by_imei("864696060000001").await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when no vehicle has the IMEI
        #[tokio::test]
        async fn returns_none_for_unknown_imei() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tracker_tables().build().await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_by_imei("000000000000000").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod set_block_command_pending {
        use trackhub_test_utils::prelude::*;

        use crate::server::data::vehicle::VehicleRepository;

        /// Expect the flag to be persisted on an existing vehicle
        #[tokio::test]
        async fn flags_existing_vehicle() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_tracker_tables()
                .with_mock_vehicle("864696060000001")
                .build()
                .await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo
                .set_block_command_pending("864696060000001")
                .await?;

            assert!(result.is_some_and(|v| v.block_command_pending));
            let stored = vehicle_repo.get_by_imei("864696060000001").await?.unwrap();
            assert!(stored.block_command_pending);

            Ok(())
        }

        /// Expect Ok(None) without error for an unknown IMEI
        #[tokio::test]
        async fn returns_none_for_unknown_imei() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tracker_tables().build().await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.set_block_command_pending("unknown").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
