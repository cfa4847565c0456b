use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Commands, Dashboard, Devices, NotFound, VehicleDetail},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Dashboard {},

    #[route("/devices")]
    Devices {},

    #[route("/commands")]
    Commands {},

    #[route("/vehicles/:imei")]
    VehicleDetail { imei: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
