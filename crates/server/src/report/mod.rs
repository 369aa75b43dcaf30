//! The remote-server activity report pipeline.
//!
//! One request-scoped, linear pass: aggregate push metrics with a single SQL
//! query, enrich each server row with billing and user-count data, format the
//! columns for display, prepend a totals row and render the table.

pub mod aggregate;
pub mod enrich;
pub mod format;
pub mod links;
pub mod row;
pub mod table;

use crate::error::ReportError;
use crate::report::enrich::{PlanDataProvider, UserCountProvider};
use crate::report::links::LinkBuilder;
use crate::report::row::{COLUMNS, Cell, ReportRow};
use crate::report::table::ActivityTable;
use sea_orm::DatabaseConnection;

/// Title of the dashboard page.
pub const REMOTE_SERVERS_TITLE: &str = "Remote servers";

/// Run the full pipeline: one aggregation query, one batch plan lookup, one
/// user-count lookup per row, then formatting and the totals row.
///
/// Latency is linear in the number of active servers because of the per-row
/// user-count lookup; that matches the upstream collaborator's contract.
#[tracing::instrument(skip_all)]
pub async fn build_remote_server_report<P, U>(
    db: &DatabaseConnection,
    plans: &P,
    user_counts: &U,
    links: &LinkBuilder,
) -> Result<ActivityTable, ReportError>
where
    P: PlanDataProvider + Sync,
    U: UserCountProvider + Sync,
{
    let activity = aggregate::fetch_server_activity(db).await?;
    let rows = enrich::enrich_rows(activity, plans, user_counts, links).await?;

    // The totals row reads the still-nullable counts; `into_cells` applies the
    // null-to-zero display substitution afterwards on independent data.
    let totals = row::totals_row(&rows);
    let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(rows.len() + 1);
    cells.push(totals);
    cells.extend(rows.into_iter().map(ReportRow::into_cells));

    Ok(ActivityTable {
        title: REMOTE_SERVERS_TITLE.to_string(),
        columns: COLUMNS.to_vec(),
        rows: cells,
    })
}
