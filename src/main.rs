//! SWAPI Catalog Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod favorites;
mod logging;
mod mount;
mod pages;
mod pagination;
mod storage;
mod store;

use app::App;
use config::CatalogConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let config = CatalogConfig::from_document();
    logging::init_logging(config.log_level_filter().unwrap_or(LevelFilter::Info));
    log::info!("[APP] starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
