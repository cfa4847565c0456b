use dioxus::prelude::*;

/// Single dashboard statistic; `children` renders the icon.
#[component]
pub fn StatCard(
    title: &'static str,
    value: usize,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body p-4",
                div { class: "flex items-center justify-between",
                    h3 { class: "text-sm font-medium", "{title}" }
                    {children}
                }
                p { class: "text-2xl font-bold {class}", "{value}" }
            }
        }
    )
}
