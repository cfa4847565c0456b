use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api;
use crate::{
    client::{
        components::{CommandForm, CommandHistory, ConfigurationForm, Page, VehicleStatusBadge},
        util::format_time,
    },
    model::{
        command::CommandDto,
        configuration::DeviceConfigurationDto,
        vehicle::{VehicleDataDto, VehicleDto},
    },
};

const TELEMETRY_LIMIT: u64 = 50;

#[component]
pub fn VehicleDetail(imei: String) -> Element {
    rsx!(
        VehicleDetailView { key: "{imei}", imei: imei.clone() }
    )
}

#[component]
fn VehicleDetailView(imei: String) -> Element {
    let mut vehicle = use_signal(|| None::<Result<VehicleDto, String>>);
    let mut telemetry = use_signal(Vec::<VehicleDataDto>::new);
    let mut commands = use_signal(Vec::<CommandDto>::new);
    let mut configuration = use_signal(|| None::<Option<DeviceConfigurationDto>>);
    let mut refresh = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let imei = imei.clone();
        use_future(move || {
            let imei = imei.clone();
            async move {
                vehicle.set(Some(api::get_vehicle(&imei).await));

                match api::get_vehicle_data(&imei, TELEMETRY_LIMIT).await {
                    Ok(samples) => telemetry.set(samples),
                    Err(err) => tracing::error!("{}", err),
                }

                match api::get_configuration(&imei).await {
                    Ok(found) => configuration.set(Some(found)),
                    Err(err) => {
                        tracing::error!("{}", err);
                        configuration.set(Some(None));
                    }
                }
            }
        });
    }

    #[cfg(feature = "web")]
    {
        let imei = imei.clone();
        use_effect(move || {
            let _ = refresh();
            let imei = imei.clone();

            spawn(async move {
                match api::get_commands(&imei).await {
                    Ok(list) => commands.set(list),
                    Err(err) => tracing::error!("{}", err),
                }
            });
        });
    }

    let loaded = vehicle();

    rsx!(
        Title { "{imei} | Trackhub" }
        Meta {
            name: "description",
            content: "Tracker telemetry, commands and configuration."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                {match loaded {
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                    Some(Err(_)) => rsx!(
                        div { role: "alert", class: "alert alert-error", "Vehicle not found" }
                    ),
                    Some(Ok(found)) => rsx!(
                        VehicleSummary { vehicle: found.clone() }
                        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                            div { class: "card bg-base-100 shadow-sm",
                                div { class: "card-body",
                                    h2 { class: "card-title", "Send Command" }
                                    CommandForm {
                                        imei: imei.clone(),
                                        vehicle: Some(found.clone()),
                                        on_sent: move |_| refresh += 1,
                                    }
                                }
                            }
                            div { class: "card bg-base-100 shadow-sm",
                                div { class: "card-body",
                                    h2 { class: "card-title", "Device Configuration" }
                                    if let Some(desired) = configuration() {
                                        ConfigurationForm { imei: imei.clone(), configuration: desired }
                                    } else {
                                        div { class: "skeleton h-48 w-full" }
                                    }
                                }
                            }
                        }
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title", "Telemetry" }
                                TelemetryTable { samples: telemetry() }
                            }
                        }
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title", "Command History" }
                                CommandHistory { commands: commands() }
                            }
                        }
                    ),
                }}
            }
        }
    )
}

#[component]
fn VehicleSummary(vehicle: VehicleDto) -> Element {
    let name = vehicle.display_name();
    let model = vehicle.tracker_model.clone().unwrap_or_else(|| "Unknown".to_string());

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-center justify-between",
                    h1 { class: "card-title text-2xl", "{name}" }
                    VehicleStatusBadge { status: vehicle.status }
                }
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-2 text-sm",
                    div {
                        p { class: "opacity-70", "IMEI" }
                        p { class: "font-mono", "{vehicle.imei}" }
                    }
                    div {
                        p { class: "opacity-70", "Model" }
                        p { "{model}" }
                    }
                    div {
                        p { class: "opacity-70", "Blocked" }
                        p { if vehicle.blocked { "Yes" } else { "No" } }
                    }
                    div {
                        p { class: "opacity-70", "Last Seen" }
                        p {
                            if let Some(last_seen) = vehicle.last_seen {
                                {format_time(last_seen)}
                            } else {
                                "Never"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TelemetryTable(samples: Vec<VehicleDataDto>) -> Element {
    if samples.is_empty() {
        return rsx!(p { class: "text-sm opacity-70", "No telemetry received yet" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-sm",
                thead {
                    tr {
                        th { "Received" }
                        th { "Latitude" }
                        th { "Longitude" }
                        th { "Speed" }
                        th { "Ignition" }
                    }
                }
                tbody {
                    {samples.into_iter().map(|sample| {
                        let latitude = sample.latitude.unwrap_or_default();
                        let longitude = sample.longitude.unwrap_or_default();
                        let speed = sample.speed.unwrap_or_default();
                        let ignition = match sample.ignition {
                            Some(true) => "On",
                            Some(false) => "Off",
                            None => "-",
                        };

                        rsx!(
                            tr { key: "{sample.id}",
                                td { {format_time(sample.timestamp)} }
                                td { "{latitude}" }
                                td { "{longitude}" }
                                td { "{speed}" }
                                td { "{ignition}" }
                            }
                        )
                    })}
                }
            }
        }
    )
}
