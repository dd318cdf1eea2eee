use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod number_utils;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Install logging and mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    domain::logging::install_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));
    domain::logging::install_clock(Box::new(infrastructure::services::BrowserClock));

    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "Market dashboard starting against {}",
        config.api_base_url
    );

    leptos::mount_to_body(app::App);
}
