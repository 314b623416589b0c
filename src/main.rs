//! Trending Movies Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod display;
mod filter;
mod logging;
mod models;
mod router;
mod seo;
mod store;
mod trailer;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let level = logging::parse_level(config.as_ref().ok().and_then(|c| c.log_level.as_deref()));
    logging::init(level);
    match &config {
        Ok(_) => log::info!("Configuration loaded"),
        Err(e) => log::error!("{}", e),
    }

    seo::apply_page_meta();
    mount_to_body(move || view! { <App config=config /> });
}
