use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// An encoded command ready to be stored for a tracker
#[derive(Clone, Debug, PartialEq)]
pub struct NewCommand {
    pub imei: String,
    pub command_type: entity::command::CommandType,
    pub command_data: String,
    pub parameters: serde_json::Value,
    pub max_retries: i32,
    pub timeout_seconds: i32,
}

pub struct CommandRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommandRepository<'a, C> {
    /// Creates a new instance of [`CommandRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a command as pending with no retries attempted
    pub async fn create(&self, command: NewCommand) -> Result<entity::command::Model, DbErr> {
        let command = entity::command::ActiveModel {
            imei: ActiveValue::Set(command.imei),
            command_type: ActiveValue::Set(command.command_type),
            command_data: ActiveValue::Set(command.command_data),
            parameters: ActiveValue::Set(Some(command.parameters)),
            status: ActiveValue::Set(entity::command::CommandStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            sent_at: ActiveValue::Set(None),
            acknowledged_at: ActiveValue::Set(None),
            retry_count: ActiveValue::Set(0),
            max_retries: ActiveValue::Set(command.max_retries),
            timeout_seconds: ActiveValue::Set(command.timeout_seconds),
            ..Default::default()
        };

        command.insert(self.db).await
    }

    /// Returns every command queued for a tracker, most recent first
    pub async fn get_by_imei(&self, imei: &str) -> Result<Vec<entity::command::Model>, DbErr> {
        entity::prelude::Command::find()
            .filter(entity::command::Column::Imei.eq(imei))
            .order_by_desc(entity::command::Column::CreatedAt)
            .order_by_desc(entity::command::Column::Id)
            .all(self.db)
            .await
    }
}
