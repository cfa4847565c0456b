use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "device_configuration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub imei: String,
    pub server_ip: Option<String>,
    pub server_port: Option<i32>,
    pub server_domain: Option<String>,
    pub apn_name: Option<String>,
    pub apn_username: Option<String>,
    pub apn_password: Option<String>,
    pub report_interval: Option<i32>,
    pub heartbeat_interval: Option<i32>,
    pub updated_at: DateTime,
    pub applied_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
