use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
mod macros;
pub mod presentation;

/// Initialize the application with proper DDD architecture
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Initialize time provider with browser implementation
    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    // Initialize logger bridging the browser console and the on-page console
    let leptos_logger = Box::new(app::LeptosLogger::new());
    domain::logging::init_logger(leptos_logger);

    application::coordinator::initialize_global_coordinator();

    gloo::utils::document().set_title("Supernova Simulation");

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Stellar simulation initialized successfully",
    );

    leptos::mount_to_body(app::App);
}
