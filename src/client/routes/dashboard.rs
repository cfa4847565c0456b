use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCar, FaClock, FaShieldHalved, FaWifi};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api;
use crate::{
    client::{
        components::{Page, StatCard, VehicleStatusBadge},
        router::Route,
        util::{
            format_time,
            stats::{recent_activity, FleetStats},
        },
    },
    model::vehicle::VehicleDto,
};

const RECENT_ACTIVITY_COUNT: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let mut vehicles = use_signal(Vec::<VehicleDto>::new);
    let mut loaded = use_signal(|| false);

    #[cfg(feature = "web")]
    use_future(move || async move {
        match api::get_vehicles().await {
            Ok(list) => vehicles.set(list),
            Err(err) => tracing::error!("{}", err),
        }
        loaded.set(true);
    });

    let stats = FleetStats::from_vehicles(&vehicles.read());
    let recent = recent_activity(&vehicles.read(), RECENT_ACTIVITY_COUNT);

    rsx!(
        Title { "Dashboard | Trackhub" }
        Meta {
            name: "description",
            content: "Fleet overview for GPS vehicle trackers."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Dashboard" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                    StatCard { title: "Total Vehicles", value: stats.total,
                        Icon { width: 20, height: 20, icon: FaCar }
                    }
                    StatCard { title: "Online", value: stats.online, class: "text-success",
                        Icon { width: 20, height: 20, icon: FaWifi }
                    }
                    StatCard { title: "Blocked", value: stats.blocked, class: "text-error",
                        Icon { width: 20, height: 20, icon: FaShieldHalved }
                    }
                    StatCard { title: "Pending Commands", value: stats.pending_commands, class: "text-warning",
                        Icon { width: 20, height: 20, icon: FaClock }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Recent Activity" }
                        if !loaded() {
                            div { class: "skeleton h-24 w-full" }
                        } else if recent.is_empty() {
                            p { class: "text-sm opacity-70", "No vehicles registered yet" }
                        } else {
                            ul { class: "flex flex-col divide-y divide-base-300",
                                {recent.into_iter().map(|vehicle| {
                                    let name = vehicle.display_name();

                                    rsx!(
                                        li { key: "{vehicle.id}", class: "flex items-center justify-between py-2",
                                            div { class: "flex flex-col",
                                                Link {
                                                    to: Route::VehicleDetail { imei: vehicle.imei.clone() },
                                                    class: "link link-hover font-medium",
                                                    "{name}"
                                                }
                                                span { class: "text-xs opacity-70",
                                                    if let Some(last_seen) = vehicle.last_seen {
                                                        {format_time(last_seen)}
                                                    } else {
                                                        "Never seen"
                                                    }
                                                }
                                            }
                                            div { class: "flex gap-2",
                                                if vehicle.block_command_pending {
                                                    span { class: "badge badge-outline badge-warning", "Pending" }
                                                }
                                                VehicleStatusBadge { status: vehicle.status }
                                            }
                                        }
                                    )
                                })}
                            }
                        }
                    }
                }
            }
        }
    )
}
