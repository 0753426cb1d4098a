pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    let (config, rejected) = config::ClientConfig::from_document();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    for message in rejected {
        log::warn!("config: {}", message);
    }

    app::run(config);
}
