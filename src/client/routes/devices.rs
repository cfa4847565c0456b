use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::util::api;
use crate::{
    client::components::{DeviceCard, Page},
    model::vehicle::VehicleDto,
};

#[component]
pub fn Devices() -> Element {
    let mut vehicles = use_signal(Vec::<VehicleDto>::new);
    let mut error = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);

    #[cfg(feature = "web")]
    use_future(move || async move {
        match api::get_vehicles().await {
            Ok(list) => vehicles.set(list),
            Err(err) => {
                tracing::error!("{}", err);
                error.set(Some(err));
            }
        }
    });

    let filtered: Vec<VehicleDto> = vehicles
        .read()
        .iter()
        .filter(|v| v.matches_search(&search.read()))
        .cloned()
        .collect();

    rsx!(
        Title { "Devices | Trackhub" }
        Meta {
            name: "description",
            content: "Registered GPS trackers."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6",
                div { class: "flex flex-wrap items-center justify-between gap-4",
                    h1 { class: "text-2xl font-bold", "Devices" }
                    label { class: "input w-full max-w-sm",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            r#type: "search",
                            placeholder: "Search by IMEI or plate",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                }
                if let Some(err) = error() {
                    div { role: "alert", class: "alert alert-error", "{err}" }
                }
                if filtered.is_empty() {
                    p { class: "text-sm opacity-70", "No devices found" }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                        for vehicle in filtered {
                            DeviceCard { key: "{vehicle.id}", vehicle }
                        }
                    }
                }
            }
        }
    )
}
