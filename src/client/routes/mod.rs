pub mod commands;
pub mod dashboard;
pub mod devices;
pub mod not_found;
pub mod vehicle_detail;

pub use commands::Commands;
pub use dashboard::Dashboard;
pub use devices::Devices;
pub use not_found::NotFound;
pub use vehicle_detail::VehicleDetail;
