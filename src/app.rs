//! Trending Movies App
//!
//! Root component: provides the catalog client and picks the page for the
//! current path.

use leptos::prelude::*;
use tmdb_catalog::CatalogClient;

use crate::components::{ConfigErrorPanel, HomePage, NotFound};
use crate::config::{AppConfig, ConfigError};
use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn App(config: Result<AppConfig, ConfigError>) -> impl IntoView {
    let config = match config {
        Ok(config) => config,
        Err(err) => return view! { <ConfigErrorPanel message=err.to_string() /> }.into_any(),
    };

    provide_context(AppContext::new(CatalogClient::browser(config.endpoints())));

    let route = Route::current();
    log::debug!("Routing to {:?}", route);
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    }
}
