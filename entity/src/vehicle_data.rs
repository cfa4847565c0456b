use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "vehicle_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub imei: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub altitude: Option<String>,
    pub speed: Option<String>,
    pub ignition: Option<bool>,
    pub timestamp: DateTime,
    pub device_time: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub raw_data: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
