//! API module providing HTTP endpoints for the activity dashboard.
//!
//! This module is organized into submodules:
//! - `activity` - Dashboard endpoints (/activity/*)
//! - `auth` - Server-admin authentication extractor
//! - `health` - Health check endpoint (/healthz)
//! - `openapi` - OpenAPI/Utoipa configuration

pub mod activity;
pub mod auth;
pub mod health;
pub mod openapi;

// Re-export commonly used items
pub use activity::ACTIVITY_TAG;
pub use health::MISC_TAG;

use crate::AppResources;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Build the application router with all routes and middleware layers.
///
/// Split out of [`start_webserver`] so tests can drive the router without
/// binding a socket.
#[tracing::instrument(skip(app_resources))]
pub fn build_router(app_resources: AppResources) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .nest("/activity", activity::router())
        .routes(routes!(health::health))
        // Attach application resources, CORS and the standard TraceLayer.
        .layer(axum::Extension(app_resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    router.merge(Redoc::with_url("/api-docs", api))
}

/// Starts the web server with all configured routes.
#[tracing::instrument(skip(app_resources))]
pub async fn start_webserver(app_resources: AppResources) -> color_eyre::Result<()> {
    let router = build_router(app_resources);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!(addr = "0.0.0.0:8080", "server listening");
    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
