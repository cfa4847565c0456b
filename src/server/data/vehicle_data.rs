use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct VehicleDataRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleDataRepository<'a, C> {
    /// Creates a new instance of [`VehicleDataRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns up to `limit` telemetry samples for a tracker, most recent first
    ///
    /// Samples sharing a timestamp are ordered by descending id so the latest insert wins.
    pub async fn get_latest_by_imei(
        &self,
        imei: &str,
        limit: u64,
    ) -> Result<Vec<entity::vehicle_data::Model>, DbErr> {
        entity::prelude::VehicleData::find()
            .filter(entity::vehicle_data::Column::Imei.eq(imei))
            .order_by_desc(entity::vehicle_data::Column::Timestamp)
            .order_by_desc(entity::vehicle_data::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
