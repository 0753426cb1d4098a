//! Start-up: build the controller and wire it into the server-rendered page.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::ClientConfig;
use crate::controller::Controller;
use crate::dom::page::BrowserPage;
use crate::dom::{self, globals, htmx, panels, wiring};
use crate::shared::api_utils::HttpBackend;

fn boot(config: ClientConfig) {
    let Some(body) = dom::body() else {
        log::error!("no <body>; controller not started");
        return;
    };

    let controller = Rc::new(Controller::new(
        BrowserPage::new(config.toast_delay_ms),
        HttpBackend,
        config.api_prefix.clone(),
    ));

    globals::install_all(&controller, &config);
    wiring::attach_behavior(&body, &controller);
    htmx::install_lifecycle(&body, &controller, &config.filter);
    panels::install(config.panel_load_delay_ms);

    log::info!("ResTrack controller ready (api prefix {})", config.api_prefix);
}

/// Boot now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn run(config: ClientConfig) {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        boot(config);
        return;
    }

    let on_ready = Closure::once_into_js(move || boot(config));
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::error!("failed to wait for DOMContentLoaded: {:?}", err);
    }
}
