use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCar, FaGear, FaLocationDot, FaShieldHalved};
use dioxus_free_icons::Icon;

use crate::{
    client::{components::VehicleStatusBadge, router::Route, util::format_time},
    model::vehicle::VehicleDto,
};

#[component]
pub fn DeviceCard(vehicle: VehicleDto) -> Element {
    let name = vehicle.display_name();

    rsx!(
        div { class: "card bg-base-100 shadow-sm hover:shadow-lg transition-shadow",
            div { class: "card-body gap-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "card-title flex gap-2",
                        Icon { width: 20, height: 20, icon: FaCar }
                        "{name}"
                    }
                    VehicleStatusBadge { status: vehicle.status }
                }
                div { class: "flex flex-col gap-1 text-sm",
                    div { class: "flex justify-between",
                        span { class: "opacity-70", "IMEI:" }
                        span { class: "font-mono", "{vehicle.imei}" }
                    }
                    if let Some(cpf) = &vehicle.cpf {
                        div { class: "flex justify-between",
                            span { class: "opacity-70", "CPF:" }
                            span { "{cpf}" }
                        }
                    }
                    if let Some(model) = &vehicle.tracker_model {
                        div { class: "flex justify-between",
                            span { class: "opacity-70", "Model:" }
                            span { "{model}" }
                        }
                    }
                    if let Some(last_seen) = vehicle.last_seen {
                        div { class: "flex justify-between",
                            span { class: "opacity-70", "Last Seen:" }
                            span { {format_time(last_seen)} }
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    if let Some(ignition) = vehicle.ignition {
                        if ignition {
                            span { class: "badge badge-outline badge-success", "Ignition On" }
                        } else {
                            span { class: "badge badge-outline", "Ignition Off" }
                        }
                    }
                    if vehicle.blocked {
                        span { class: "badge badge-error gap-1",
                            Icon { width: 12, height: 12, icon: FaShieldHalved }
                            "Blocked"
                        }
                    }
                    if vehicle.block_command_pending {
                        span { class: "badge badge-outline badge-warning", "Command Pending" }
                    }
                }
                div { class: "card-actions",
                    Link {
                        to: Route::VehicleDetail { imei: vehicle.imei.clone() },
                        class: "btn btn-outline btn-sm flex-1 gap-1",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "View"
                    }
                    Link {
                        to: Route::Commands {},
                        class: "btn btn-outline btn-sm flex-1 gap-1",
                        Icon { width: 14, height: 14, icon: FaGear }
                        "Commands"
                    }
                }
            }
        }
    )
}
