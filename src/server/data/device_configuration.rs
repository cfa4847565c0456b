use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Desired server and APN settings for a tracker
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DesiredConfiguration {
    pub server_ip: Option<String>,
    pub server_port: Option<i32>,
    pub server_domain: Option<String>,
    pub apn_name: Option<String>,
    pub apn_username: Option<String>,
    pub apn_password: Option<String>,
    pub report_interval: Option<i32>,
    pub heartbeat_interval: Option<i32>,
}

pub struct DeviceConfigurationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeviceConfigurationRepository<'a, C> {
    /// Creates a new instance of [`DeviceConfigurationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_imei(
        &self,
        imei: &str,
    ) -> Result<Option<entity::device_configuration::Model>, DbErr> {
        entity::prelude::DeviceConfiguration::find()
            .filter(entity::device_configuration::Column::Imei.eq(imei))
            .one(self.db)
            .await
    }

    /// Inserts or replaces the desired configuration of a tracker
    ///
    /// Conflicts on `imei` overwrite every desired field and `updated_at`; `applied_at` keeps its
    /// stored value.
    pub async fn upsert(
        &self,
        imei: &str,
        desired: DesiredConfiguration,
    ) -> Result<entity::device_configuration::Model, DbErr> {
        let configuration = entity::device_configuration::ActiveModel {
            imei: ActiveValue::Set(imei.to_string()),
            server_ip: ActiveValue::Set(desired.server_ip),
            server_port: ActiveValue::Set(desired.server_port),
            server_domain: ActiveValue::Set(desired.server_domain),
            apn_name: ActiveValue::Set(desired.apn_name),
            apn_username: ActiveValue::Set(desired.apn_username),
            apn_password: ActiveValue::Set(desired.apn_password),
            report_interval: ActiveValue::Set(desired.report_interval),
            heartbeat_interval: ActiveValue::Set(desired.heartbeat_interval),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            applied_at: ActiveValue::Set(None),
            ..Default::default()
        };

        entity::prelude::DeviceConfiguration::insert(configuration)
            .on_conflict(
                OnConflict::column(entity::device_configuration::Column::Imei)
                    .update_columns([
                        entity::device_configuration::Column::ServerIp,
                        entity::device_configuration::Column::ServerPort,
                        entity::device_configuration::Column::ServerDomain,
                        entity::device_configuration::Column::ApnName,
                        entity::device_configuration::Column::ApnUsername,
                        entity::device_configuration::Column::ApnPassword,
                        entity::device_configuration::Column::ReportInterval,
                        entity::device_configuration::Column::HeartbeatInterval,
                        entity::device_configuration::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::DesiredConfiguration;

    fn desired(server_ip: &str) -> DesiredConfiguration {
        DesiredConfiguration {
            server_ip: Some(server_ip.to_string()),
            server_port: Some(8000),
            apn_name: Some("internet.carrier".to_string()),
            report_interval: Some(60),
            ..Default::default()
        }
    }

    mod upsert {
        use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};
        use trackhub_test_utils::prelude::*;

        use super::desired;
        use crate::server::data::device_configuration::DeviceConfigurationRepository;

        /// Expect a new row when the tracker has no configuration
        #[tokio::test]
        async fn inserts_new_configuration() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tracker_tables().build().await?;

            let config_repo = DeviceConfigurationRepository::new(&test.db);
            let result = config_repo
                .upsert("864696060000001", desired("203.0.113.10"))
                .await?;

            assert_eq!(result.imei, "864696060000001");
            assert_eq!(result.server_ip.as_deref(), Some("203.0.113.10"));
            assert!(result.applied_at.is_none());

            Ok(())
        }

        /// Expect a second upsert to replace fields in place and keep `applied_at`
        #[tokio::test]
        async fn replaces_existing_configuration() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tracker_tables().build().await?;

            let config_repo = DeviceConfigurationRepository::new(&test.db);
            let first = config_repo
                .upsert("864696060000001", desired("203.0.113.10"))
                .await?;

            let applied_at = chrono::Utc::now().naive_utc();
            let mut first_am = first.clone().into_active_model();
            first_am.applied_at = ActiveValue::Set(Some(applied_at));
            first_am.update(&test.db).await?;

            let second = config_repo
                .upsert("864696060000001", desired("198.51.100.7"))
                .await?;

            assert_eq!(second.id, first.id);
            assert_eq!(second.server_ip.as_deref(), Some("198.51.100.7"));
            assert!(second.updated_at >= first.updated_at);
            assert_eq!(second.applied_at, Some(applied_at));

            let rows = entity::prelude::DeviceConfiguration::find()
                .all(&test.db)
                .await?;
            assert_eq!(rows.len(), 1);

            Ok(())
        }
    }

    mod get_by_imei {
        use trackhub_test_utils::prelude::*;

        use crate::server::data::device_configuration::DeviceConfigurationRepository;

        /// Expect Ok(None) for a tracker without configuration
        #[tokio::test]
        async fn returns_none_when_absent() -> Result<(), TestError> {
            let test = TestBuilder::new().with_tracker_tables().build().await?;

            let config_repo = DeviceConfigurationRepository::new(&test.db);
            let result = config_repo.get_by_imei("864696060000001").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        #[tokio::test]
        async fn finds_fixture_configuration() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_tracker_tables()
                .with_mock_configuration("864696060000001")
                .build()
                .await?;

            let config_repo = DeviceConfigurationRepository::new(&test.db);
            let result = config_repo.get_by_imei("864696060000001").await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }
    }
}
