//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app and serves its compiled assets. All
//! internship, invitation and user data comes from the external REST API,
//! which the browser calls directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::errors::LeptosConfigError;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Errors produced while assembling the router.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Missing `LEPTOS_*` environment or malformed `[package.metadata.leptos]`.
    #[error("leptos configuration: {0}")]
    LeptosConfig(#[from] LeptosConfigError),
}

/// Leptos SSR frontend plus `/pkg` assets and a health check.
///
/// # Errors
///
/// Returns [`RouterError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded.
pub fn app() -> Result<Router, RouterError> {
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
