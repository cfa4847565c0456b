use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Trackhub"
                    }
                    p { class: "text-xs",
                        "v0.1.0.Alpha-1"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    li { Link { to: Route::Devices {}, "Devices" } }
                    li { Link { to: Route::Commands {}, "Commands" } }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-ghost btn-sm",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
