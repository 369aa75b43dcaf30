//! Activity dashboard endpoints.
//!
//! - `/activity/remote` - Admin table of per-server usage and billing activity

use crate::api::auth::ServerAdminAuth;
use crate::error::ReportError;
use crate::report::enrich::{SeaOrmPlanDataProvider, SeaOrmUserCountProvider};
use crate::report::links::LinkBuilder;
use crate::{AppResources, report};
use axum::{Extension, response::Html};
use utoipa_axum::{router::OpenApiRouter, routes};

/// Tag for OpenAPI documentation.
pub const ACTIVITY_TAG: &str = "Activity Dashboard";

/// Creates the activity dashboard router.
#[tracing::instrument(skip_all)]
pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(remote_server_activity))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/remote",
    tag = ACTIVITY_TAG,
    operation_id = "Remote Server Activity",
    summary = "Admin dashboard of remote server activity",
    description = "Renders one table row per active remote server, joining push usage metrics \
                   (distinct mobile users, pushes forwarded over the trailing 7 days) with \
                   billing plan data and guest/non-guest user counts, plus a totals row.\n\n\
                   The result is recomputed from scratch on every request.",
    responses(
        (status = 200, description = "Rendered dashboard table", body = String, content_type = "text/html"),
        (status = 401, description = "Missing or invalid admin token", content_type = "application/json"),
        (status = 500, description = "Aggregation query or rendering failure", content_type = "application/json")
    ),
    security(("Authorization" = []))
)]
async fn remote_server_activity(
    _admin: ServerAdminAuth,
    Extension(resources): Extension<AppResources>,
) -> Result<Html<String>, ReportError> {
    let plans = SeaOrmPlanDataProvider { db: &resources.db };
    let user_counts = SeaOrmUserCountProvider { db: &resources.db };
    let links = LinkBuilder::new(&resources.config.frontend_url);
    let table =
        report::build_remote_server_report(&resources.db, &plans, &user_counts, &links).await?;
    Ok(Html(table.render_page()?))
}
