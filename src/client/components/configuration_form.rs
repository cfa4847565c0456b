use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::util::api;
use crate::{
    client::util::format_time,
    model::configuration::{DeviceConfigurationDto, UpdateDeviceConfigurationDto},
};

/// Text form state for the desired configuration of a tracker
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigurationDraft {
    pub server_ip: String,
    pub server_port: String,
    pub server_domain: String,
    pub apn_name: String,
    pub apn_username: String,
    pub apn_password: String,
    pub report_interval: String,
    pub heartbeat_interval: String,
}

impl ConfigurationDraft {
    pub fn from_configuration(configuration: Option<&DeviceConfigurationDto>) -> Self {
        let Some(configuration) = configuration else {
            return Self::default();
        };
        let request = UpdateDeviceConfigurationDto::from(configuration);

        Self {
            server_ip: request.server_ip.unwrap_or_default(),
            server_port: number_text(request.server_port),
            server_domain: request.server_domain.unwrap_or_default(),
            apn_name: request.apn_name.unwrap_or_default(),
            apn_username: request.apn_username.unwrap_or_default(),
            apn_password: request.apn_password.unwrap_or_default(),
            report_interval: number_text(request.report_interval),
            heartbeat_interval: number_text(request.heartbeat_interval),
        }
    }

    /// Blank fields become absent; unparsable numbers too, so the server reports them
    pub fn to_request(&self) -> UpdateDeviceConfigurationDto {
        UpdateDeviceConfigurationDto {
            server_ip: text(&self.server_ip),
            server_port: number(&self.server_port),
            server_domain: text(&self.server_domain),
            apn_name: text(&self.apn_name),
            apn_username: text(&self.apn_username),
            apn_password: text(&self.apn_password),
            report_interval: number(&self.report_interval),
            heartbeat_interval: number(&self.heartbeat_interval),
        }
    }
}

fn number_text(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn number(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

#[component]
pub fn ConfigurationForm(imei: String, configuration: Option<DeviceConfigurationDto>) -> Element {
    let mut draft =
        use_signal(|| ConfigurationDraft::from_configuration(configuration.as_ref()));
    let mut saved = use_signal(|| configuration.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let save = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            let imei = imei.clone();
            let request = draft.read().to_request();

            saving.set(true);
            error.set(None);

            spawn(async move {
                match api::update_configuration(&imei, &request).await {
                    Ok(configuration) => saved.set(Some(configuration)),
                    Err(err) => {
                        dioxus_logger::tracing::error!("{}", err);
                        error.set(Some(err));
                    }
                }

                saving.set(false);
            });
        }
    };

    rsx!(
        div { class: "flex flex-col gap-2",
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                TextField {
                    label: "Server IP",
                    value: draft.read().server_ip.clone(),
                    oninput: move |v| draft.write().server_ip = v,
                }
                TextField {
                    label: "Server Port",
                    input_type: "number",
                    value: draft.read().server_port.clone(),
                    oninput: move |v| draft.write().server_port = v,
                }
                TextField {
                    label: "Server Domain",
                    value: draft.read().server_domain.clone(),
                    oninput: move |v| draft.write().server_domain = v,
                }
                TextField {
                    label: "APN Name",
                    value: draft.read().apn_name.clone(),
                    oninput: move |v| draft.write().apn_name = v,
                }
                TextField {
                    label: "APN Username",
                    value: draft.read().apn_username.clone(),
                    oninput: move |v| draft.write().apn_username = v,
                }
                TextField {
                    label: "APN Password",
                    input_type: "password",
                    value: draft.read().apn_password.clone(),
                    oninput: move |v| draft.write().apn_password = v,
                }
                TextField {
                    label: "Report Interval (s)",
                    input_type: "number",
                    value: draft.read().report_interval.clone(),
                    oninput: move |v| draft.write().report_interval = v,
                }
                TextField {
                    label: "Heartbeat Interval (s)",
                    input_type: "number",
                    value: draft.read().heartbeat_interval.clone(),
                    oninput: move |v| draft.write().heartbeat_interval = v,
                }
            }
            div { class: "text-xs opacity-70",
                if let Some(configuration) = saved() {
                    p { "Updated: " {format_time(configuration.updated_at)} }
                    if let Some(applied_at) = configuration.applied_at {
                        p { "Applied: " {format_time(applied_at)} }
                    } else {
                        p { "Not yet applied by the device" }
                    }
                } else {
                    p { "No configuration saved" }
                }
            }
            button {
                class: "btn btn-primary",
                disabled: saving(),
                onclick: save,
                if saving() { "Saving..." } else { "Save Configuration" }
            }
            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }
        }
    )
}

#[component]
fn TextField(
    label: &'static str,
    input_type: Option<&'static str>,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class: "input w-full",
                r#type: input_type.unwrap_or("text"),
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    )
}
