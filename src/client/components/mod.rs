pub mod badge;
pub mod command_form;
pub mod command_history;
pub mod configuration_form;
pub mod device_card;
pub mod navbar;
pub mod page;
pub mod stat_card;

pub use badge::{CommandStatusBadge, VehicleStatusBadge};
pub use command_form::{CommandForm, CommandKind};
pub use command_history::CommandHistory;
pub use configuration_form::ConfigurationForm;
pub use device_card::DeviceCard;
pub use navbar::Navbar;
pub use page::Page;
pub use stat_card::StatCard;
