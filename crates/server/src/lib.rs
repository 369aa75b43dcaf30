//! Admin dashboard aggregating usage and billing activity of registered
//! remote servers.
//!
//! The core is a single request-scoped pipeline: one SQL aggregation query
//! over the push-notification tables, a per-server enrichment pass (billing
//! plan, guest/non-guest user counts, cross-links), display formatting with
//! a prepended totals row, and HTML rendering.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

pub mod api;
pub mod config;
pub mod entity;
pub mod error;
pub mod report;

#[derive(Clone, Debug)]
pub struct AppResources {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}
