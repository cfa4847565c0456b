use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api;
use crate::{
    client::components::{CommandForm, CommandHistory, Page},
    model::{command::CommandDto, vehicle::VehicleDto},
};

#[component]
pub fn Commands() -> Element {
    let mut vehicles = use_signal(Vec::<VehicleDto>::new);
    let mut selected = use_signal(|| None::<String>);
    let mut history = use_signal(Vec::<CommandDto>::new);
    let mut refresh = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    use_future(move || async move {
        match api::get_vehicles().await {
            Ok(list) => {
                if selected.peek().is_none() {
                    selected.set(list.first().map(|v| v.imei.clone()));
                }
                vehicles.set(list);
            }
            Err(err) => tracing::error!("{}", err),
        }
    });

    // Reload history whenever the selection changes or a command is queued
    #[cfg(feature = "web")]
    use_effect(move || {
        let imei = selected();
        let _ = refresh();

        spawn(async move {
            let Some(imei) = imei else {
                history.set(Vec::new());
                return;
            };

            match api::get_commands(&imei).await {
                Ok(commands) => history.set(commands),
                Err(err) => tracing::error!("{}", err),
            }
        });
    });

    let current = selected();
    let vehicle = current
        .as_ref()
        .and_then(|imei| vehicles.read().iter().find(|v| &v.imei == imei).cloned());

    rsx!(
        Title { "Commands | Trackhub" }
        Meta {
            name: "description",
            content: "Queue block, server and APN commands for GPS trackers."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Command Center" }
                fieldset { class: "fieldset max-w-md",
                    legend { class: "fieldset-legend", "Device" }
                    select {
                        class: "select w-full",
                        onchange: move |evt| selected.set(Some(evt.value())),
                        {vehicles.read().iter().map(|v| {
                            let name = v.display_name();
                            let is_selected = current.as_deref() == Some(v.imei.as_str());

                            rsx!(
                                option {
                                    key: "{v.id}",
                                    value: "{v.imei}",
                                    selected: is_selected,
                                    "{name} ({v.imei})"
                                }
                            )
                        })}
                    }
                }
                if let Some(imei) = current.clone() {
                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title", "Send Command" }
                                CommandForm {
                                    key: "{imei}",
                                    imei: imei.clone(),
                                    vehicle: vehicle.clone(),
                                    on_sent: move |_| refresh += 1,
                                }
                            }
                        }
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h2 { class: "card-title", "Command History" }
                                CommandHistory { commands: history() }
                            }
                        }
                    }
                } else {
                    p { class: "text-sm opacity-70", "Select a device to send commands" }
                }
            }
        }
    )
}
