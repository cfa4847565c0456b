use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum CommandType {
    #[sea_orm(string_value = "GTOUT")]
    Gtout,
    #[sea_orm(string_value = "GTSRI")]
    Gtsri,
    #[sea_orm(string_value = "GTBSI")]
    Gtbsi,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CommandStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "sent")]
    Sent,
    #[sea_orm(string_value = "acknowledged")]
    Acknowledged,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "command")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub imei: String,
    pub command_type: CommandType,
    #[sea_orm(column_type = "Text")]
    pub command_data: String,
    pub parameters: Option<Json>,
    pub status: CommandStatus,
    pub created_at: DateTime,
    pub sent_at: Option<DateTime>,
    pub acknowledged_at: Option<DateTime>,
    pub retry_count: i32,
    pub max_retries: i32,
    pub timeout_seconds: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
