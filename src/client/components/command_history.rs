use dioxus::prelude::*;

use crate::{
    client::{components::CommandStatusBadge, util::format_time},
    model::command::CommandDto,
};

#[component]
pub fn CommandHistory(commands: Vec<CommandDto>) -> Element {
    if commands.is_empty() {
        return rsx!(p { class: "text-sm opacity-70", "No commands sent to this device yet" });
    }

    rsx!(
        ul { class: "flex flex-col gap-3",
            {commands.into_iter().map(|command| {
                let command_type = command.command_type.as_str();
                let action = command.action();
                let parameters = command
                    .parameters
                    .as_ref()
                    .and_then(|p| serde_json::to_string_pretty(p).ok());

                rsx!(
                    li { key: "{command.id}", class: "border border-base-300 rounded-lg p-3 flex flex-col gap-2",
                        div { class: "flex items-center justify-between",
                            div { class: "flex items-center gap-2",
                                span { class: "badge badge-outline", "{command_type}" }
                                span { class: "text-sm", "{action}" }
                            }
                            CommandStatusBadge { status: command.status }
                        }
                        code { class: "font-mono text-xs break-all", "{command.command_data}" }
                        div { class: "text-xs opacity-70",
                            p { "Created: " {format_time(command.created_at)} }
                            if let Some(sent_at) = command.sent_at {
                                p { "Sent: " {format_time(sent_at)} }
                            }
                            if let Some(acknowledged_at) = command.acknowledged_at {
                                p { "Acknowledged: " {format_time(acknowledged_at)} }
                            }
                            p { "Retries: {command.retry_count}/{command.max_retries}, timeout {command.timeout_seconds}s" }
                        }
                        if let Some(parameters) = parameters {
                            pre { class: "bg-base-200 rounded p-2 text-xs overflow-x-auto", "{parameters}" }
                        }
                    }
                )
            })}
        }
    )
}
