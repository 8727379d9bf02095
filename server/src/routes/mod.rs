//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered blog page through Leptos, the compiled WASM/JS/CSS
//! bundle under `/pkg`, a health check, and any other static file from the
//! site root.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use blog_client::app::{App, shell};
use blog_client::config::PageConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router. Every page is rendered with `page`.
pub fn app(options: LeptosOptions, page: PageConfig) -> Router {
    let site_root = PathBuf::from(options.site_root.as_ref());
    let routes = generate_route_list({
        let page = page.clone();
        move || view! { <App config=page.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone(), page.clone())
        })
        .with_state(options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
