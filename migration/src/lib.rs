pub use sea_orm_migration::prelude::*;

mod m20251101_000001_vehicle;
mod m20251101_000002_vehicle_data;
mod m20251101_000003_command;
mod m20251101_000004_device_configuration;
mod m20251101_000005_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_vehicle::Migration),
            Box::new(m20251101_000002_vehicle_data::Migration),
            Box::new(m20251101_000003_command::Migration),
            Box::new(m20251101_000004_device_configuration::Migration),
            Box::new(m20251101_000005_message::Migration),
        ]
    }
}
