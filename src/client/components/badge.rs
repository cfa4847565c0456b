use dioxus::prelude::*;

use crate::model::{command::CommandStatus, vehicle::VehicleStatus};

#[component]
pub fn VehicleStatusBadge(status: VehicleStatus) -> Element {
    let color = match status {
        VehicleStatus::Online => "badge-success",
        VehicleStatus::Offline => "badge-neutral",
        VehicleStatus::Blocked => "badge-error",
    };
    let label = status.as_str();

    rsx!(
        span { class: "badge {color}", "{label}" }
    )
}

#[component]
pub fn CommandStatusBadge(status: CommandStatus) -> Element {
    let color = match status {
        CommandStatus::Acknowledged => "badge-success",
        CommandStatus::Sent => "badge-info",
        CommandStatus::Failed => "badge-error",
        CommandStatus::Pending => "badge-warning",
    };
    let label = status.as_str();

    rsx!(
        span { class: "badge {color}", "{label}" }
    )
}
