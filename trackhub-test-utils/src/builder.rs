//! Declarative test builder.
//!
//! Configuration methods only queue work; tables are created and fixtures inserted when
//! `build()` runs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_tracker_tables: bool,

    vehicles: Vec<String>,
    telemetry: Vec<(String, usize)>, // (imei, sample count)
    messages: Vec<(String, usize)>,  // (cpf, message count)
    configurations: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tracker_tables: false,
            vehicles: Vec::new(),
            telemetry: Vec::new(),
            messages: Vec::new(),
            configurations: Vec::new(),
        }
    }

    /// Create every table of the tracker schema.
    pub fn with_tracker_tables(mut self) -> Self {
        self.include_tracker_tables = true;
        self
    }

    /// Create a single entity table.
    ///
    /// ```no_run
    /// use trackhub_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), trackhub_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Vehicle)
    ///     .with_table(Command)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an online GV50 vehicle. Vehicles are inserted in call order.
    pub fn with_mock_vehicle(mut self, imei: impl Into<String>) -> Self {
        self.vehicles.push(imei.into());
        self
    }

    /// Insert `count` telemetry samples for the tracker, oldest first.
    pub fn with_mock_telemetry(mut self, imei: impl Into<String>, count: usize) -> Self {
        self.telemetry.push((imei.into(), count));
        self
    }

    /// Insert `count` messages addressed to the owner CPF.
    pub fn with_mock_message(mut self, cpf: impl Into<String>, count: usize) -> Self {
        self.messages.push((cpf.into(), count));
        self
    }

    /// Insert a never-applied desired configuration for the tracker.
    pub fn with_mock_configuration(mut self, imei: impl Into<String>) -> Self {
        self.configurations.push(imei.into());
        self
    }

    /// Create the queued tables, then insert fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for use
    /// - `Err(TestError::DbErr)` - Connecting, creating a table or inserting a fixture failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_tracker_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::VehicleData),
                schema.create_table_from_entity(entity::prelude::Command),
                schema.create_table_from_entity(entity::prelude::DeviceConfiguration),
                schema.create_table_from_entity(entity::prelude::Message),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for imei in &self.vehicles {
            context.tracker().insert_mock_vehicle(imei).await?;
        }

        for (imei, count) in &self.telemetry {
            context.tracker().insert_mock_telemetry(imei, *count).await?;
        }

        for (cpf, count) in &self.messages {
            context.tracker().insert_mock_messages(cpf, *count).await?;
        }

        for imei in &self.configurations {
            context.tracker().insert_mock_configuration(imei).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
