//! Per-row enrichment: billing plan data, guest/non-guest counts, cross-links.

use crate::entity::{remote_server_plan, remote_server_user_count};
use crate::error::ReportError;
use crate::report::aggregate::ServerActivity;
use crate::report::links::LinkBuilder;
use crate::report::row::ReportRow;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::collections::HashMap;

/// Billing state of one remote server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanData {
    pub current_plan_name: String,
    pub current_status: String,
    pub annual_revenue_cents: i64,
}

/// Guest/non-guest account totals of one remote server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteUserCounts {
    pub non_guest_user_count: i64,
    pub guest_user_count: i64,
}

/// Batch billing lookup, called once per report. Servers absent from the
/// returned map have no plan data; that is a valid state.
#[async_trait]
pub trait PlanDataProvider {
    async fn plan_data_by_server(&self) -> Result<HashMap<i64, PlanData>, ReportError>;
}

/// Per-server user-count lookup, called once per row. Must not fail for
/// unknown servers; implementations return zero counts instead.
#[async_trait]
pub trait UserCountProvider {
    async fn guest_and_non_guest_count(
        &self,
        server_id: i64,
    ) -> Result<RemoteUserCounts, ReportError>;
}

/// Reads the `remote_server_plan` projection maintained by the billing
/// service.
pub struct SeaOrmPlanDataProvider<'a> {
    pub db: &'a DatabaseConnection,
}

#[async_trait]
impl PlanDataProvider for SeaOrmPlanDataProvider<'_> {
    #[tracing::instrument(skip(self))]
    async fn plan_data_by_server(&self) -> Result<HashMap<i64, PlanData>, ReportError> {
        let rows = remote_server_plan::Entity::find().all(self.db).await?;
        Ok(rows
            .into_iter()
            .map(|model| {
                (
                    model.server_id,
                    PlanData {
                        current_plan_name: model.current_plan_name,
                        current_status: model.current_status,
                        annual_revenue_cents: model.annual_revenue_cents,
                    },
                )
            })
            .collect())
    }
}

/// Reads the `remote_server_user_count` projection maintained by the
/// audit-log ingestion pipeline.
pub struct SeaOrmUserCountProvider<'a> {
    pub db: &'a DatabaseConnection,
}

#[async_trait]
impl UserCountProvider for SeaOrmUserCountProvider<'_> {
    #[tracing::instrument(skip(self))]
    async fn guest_and_non_guest_count(
        &self,
        server_id: i64,
    ) -> Result<RemoteUserCounts, ReportError> {
        let found = remote_server_user_count::Entity::find_by_id(server_id)
            .one(self.db)
            .await?;
        Ok(found
            .map(|model| RemoteUserCounts {
                non_guest_user_count: model.non_guest_count,
                guest_user_count: model.guest_count,
            })
            .unwrap_or_default())
    }
}

/// Attach plan data, user counts and cross-links to every aggregated row.
///
/// Plan data is fetched in one batch up front; user counts are looked up
/// sequentially, one call per server.
#[tracing::instrument(skip_all, fields(servers = activity.len()))]
pub async fn enrich_rows<P, U>(
    activity: Vec<ServerActivity>,
    plans: &P,
    user_counts: &U,
    links: &LinkBuilder,
) -> Result<Vec<ReportRow>, ReportError>
where
    P: PlanDataProvider + Sync,
    U: UserCountProvider + Sync,
{
    let plan_data_by_server = plans.plan_data_by_server().await?;

    let mut rows = Vec::with_capacity(activity.len());
    for server in activity {
        let plan = plan_data_by_server.get(&server.id).cloned();
        let counts = user_counts.guest_and_non_guest_count(server.id).await?;
        let links_markup = format!(
            "{} {}",
            links.stats_link(server.id),
            links.support_link(&server.hostname)
        );
        rows.push(ReportRow {
            server,
            plan,
            user_counts: counts,
            links: links_markup,
        });
    }
    Ok(rows)
}
