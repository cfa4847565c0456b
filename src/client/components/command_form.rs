use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaServer, FaShieldHalved, FaWifi};
use dioxus_free_icons::Icon;

#[cfg(feature = "web")]
use crate::client::util::api;
use crate::{
    model::{
        command::{ApnConfigCommandDto, BlockCommandDto, ServerConfigCommandDto},
        vehicle::VehicleDto,
    },
    protocol::{self, TrackerModel},
};

/// The command forms offered by the command center
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Block,
    Server,
    Apn,
}

impl CommandKind {
    pub const ALL: [CommandKind; 3] = [CommandKind::Block, CommandKind::Server, CommandKind::Apn];

    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::Block => "Block / Unblock",
            CommandKind::Server => "Server",
            CommandKind::Apn => "APN",
        }
    }

    /// The AT command the draft would be encoded to, or `None` while a required value is unusable
    pub fn preview(&self, draft: &CommandDraft) -> Option<String> {
        match self {
            CommandKind::Block => Some(protocol::encode_block(
                draft.block,
                TrackerModel::from_name(&draft.tracker_model),
                &draft.password,
            )),
            CommandKind::Server => {
                let port = draft.server_port()?;
                Some(protocol::encode_server_config(
                    draft.server_ip.trim(),
                    port,
                    &draft.password,
                ))
            }
            CommandKind::Apn => Some(protocol::encode_apn_config(
                draft.apn_name.trim(),
                draft.apn_username.trim(),
                &draft.apn_password,
                &draft.password,
            )),
        }
    }
}

/// Form state shared by all command kinds
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandDraft {
    pub block: bool,
    pub tracker_model: String,
    pub password: String,
    pub server_ip: String,
    pub server_port: String,
    pub apn_name: String,
    pub apn_username: String,
    pub apn_password: String,
}

impl CommandDraft {
    /// Starts a draft with the vehicle's tracker model and device password filled in
    pub fn for_vehicle(vehicle: Option<&VehicleDto>) -> Self {
        Self {
            tracker_model: vehicle
                .and_then(|v| v.tracker_model.clone())
                .unwrap_or_else(|| TrackerModel::default().to_string()),
            password: vehicle
                .and_then(|v| v.tracker_password.clone())
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    fn server_port(&self) -> Option<i32> {
        self.server_port.trim().parse().ok()
    }

    pub fn block_request(&self) -> BlockCommandDto {
        BlockCommandDto {
            block: Some(self.block),
            tracker_model: Some(self.tracker_model.clone()),
            password: Some(self.password.clone()),
        }
    }

    /// An unparsable port is left out so the server reports it as missing
    pub fn server_request(&self) -> ServerConfigCommandDto {
        ServerConfigCommandDto {
            server_ip: Some(self.server_ip.trim().to_string()),
            server_port: self.server_port(),
            password: Some(self.password.clone()),
        }
    }

    pub fn apn_request(&self) -> ApnConfigCommandDto {
        ApnConfigCommandDto {
            apn_name: Some(self.apn_name.trim().to_string()),
            apn_username: non_empty(&self.apn_username),
            apn_password: non_empty(&self.apn_password),
            password: Some(self.password.clone()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Tabbed block, server and APN command forms with a live preview of the encoded command
///
/// Re-key the component when the selected vehicle changes so the draft picks up its defaults.
#[component]
pub fn CommandForm(imei: String, vehicle: Option<VehicleDto>, on_sent: EventHandler<()>) -> Element {
    let mut kind = use_signal(|| CommandKind::Block);
    let mut draft = use_signal(|| CommandDraft::for_vehicle(vehicle.as_ref()));
    let mut sending = use_signal(|| false);
    let mut outcome = use_signal(|| None::<Result<String, String>>);

    let submit = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            let imei = imei.clone();
            let current = draft.read().clone();
            let selected = kind();

            sending.set(true);
            outcome.set(None);

            spawn(async move {
                let result = match selected {
                    CommandKind::Block => {
                        api::send_block_command(&imei, &current.block_request()).await
                    }
                    CommandKind::Server => {
                        api::send_server_config_command(&imei, &current.server_request()).await
                    }
                    CommandKind::Apn => {
                        api::send_apn_config_command(&imei, &current.apn_request()).await
                    }
                };

                match result {
                    Ok(created) => {
                        outcome.set(Some(Ok(format!("Command #{} queued", created.command_id))));
                        on_sent.call(());
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("{}", err);
                        outcome.set(Some(Err(err)));
                    }
                }

                sending.set(false);
            });
        }
    };

    let preview = kind().preview(&draft.read());
    let submit_label = match kind() {
        CommandKind::Block if draft.read().block => "Block Device",
        CommandKind::Block => "Unblock Device",
        CommandKind::Server => "Configure Server",
        CommandKind::Apn => "Configure APN",
    };

    rsx!(
        div { class: "flex flex-col gap-4",
            div { role: "tablist", class: "tabs tabs-box",
                {CommandKind::ALL.into_iter().map(|k| {
                    let label = k.label();
                    let class = if kind() == k { "tab tab-active" } else { "tab" };

                    rsx!(
                        a {
                            role: "tab",
                            class: class,
                            onclick: move |_| kind.set(k),
                            "{label}"
                        }
                    )
                })}
            }

            {match kind() {
                CommandKind::Block => rsx!(
                    label { class: "label cursor-pointer justify-start gap-2",
                        input {
                            r#type: "checkbox",
                            class: "toggle toggle-error",
                            checked: draft.read().block,
                            onchange: move |evt| draft.write().block = evt.checked(),
                        }
                        span { if draft.read().block { "Block Device" } else { "Unblock Device" } }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Tracker Model" }
                        select {
                            class: "select w-full",
                            onchange: move |evt| draft.write().tracker_model = evt.value(),
                            for model in TrackerModel::ALL {
                                option {
                                    value: model.as_str(),
                                    selected: draft.read().tracker_model.eq_ignore_ascii_case(model.as_str()),
                                    "{model}"
                                }
                            }
                        }
                    }
                ),
                CommandKind::Server => rsx!(
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Server IP Address" }
                        input {
                            class: "input w-full",
                            r#type: "text",
                            placeholder: "192.168.1.100",
                            value: draft.read().server_ip.clone(),
                            oninput: move |evt| draft.write().server_ip = evt.value(),
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Server Port" }
                        input {
                            class: "input w-full",
                            r#type: "number",
                            placeholder: "8000",
                            value: draft.read().server_port.clone(),
                            oninput: move |evt| draft.write().server_port = evt.value(),
                        }
                    }
                ),
                CommandKind::Apn => rsx!(
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "APN Name" }
                        input {
                            class: "input w-full",
                            r#type: "text",
                            placeholder: "internet.provider.com",
                            value: draft.read().apn_name.clone(),
                            oninput: move |evt| draft.write().apn_name = evt.value(),
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "APN Username" }
                        input {
                            class: "input w-full",
                            r#type: "text",
                            placeholder: "Optional username",
                            value: draft.read().apn_username.clone(),
                            oninput: move |evt| draft.write().apn_username = evt.value(),
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "APN Password" }
                        input {
                            class: "input w-full",
                            r#type: "password",
                            placeholder: "Optional password",
                            value: draft.read().apn_password.clone(),
                            oninput: move |evt| draft.write().apn_password = evt.value(),
                        }
                    }
                ),
            }}

            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "Device Password" }
                input {
                    class: "input w-full",
                    r#type: "password",
                    placeholder: "Enter device password",
                    value: draft.read().password.clone(),
                    oninput: move |evt| draft.write().password = evt.value(),
                }
            }

            div { class: "flex flex-col gap-1",
                p { class: "text-sm opacity-70", "Command preview" }
                if let Some(preview) = preview {
                    code { class: "bg-base-200 rounded p-2 font-mono text-sm break-all", "{preview}" }
                } else {
                    p { class: "text-sm text-warning", "Enter a numeric port to preview the command" }
                }
            }

            button {
                class: "btn btn-primary w-full gap-2",
                disabled: sending(),
                onclick: submit,
                {match kind() {
                    CommandKind::Block => rsx!(Icon { width: 16, height: 16, icon: FaShieldHalved }),
                    CommandKind::Server => rsx!(Icon { width: 16, height: 16, icon: FaServer }),
                    CommandKind::Apn => rsx!(Icon { width: 16, height: 16, icon: FaWifi }),
                }}
                if sending() { "Sending..." } else { "{submit_label}" }
            }

            if let Some(result) = outcome() {
                {match result {
                    Ok(message) => rsx!(div { class: "alert alert-success", "{message}" }),
                    Err(err) => rsx!(div { class: "alert alert-error", "{err}" }),
                }}
            }
        }
    )
}
