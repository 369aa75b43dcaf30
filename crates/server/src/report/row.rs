//! Typed dashboard rows and their fixed column contract.

use crate::report::aggregate::ServerActivity;
use crate::report::enrich::{PlanData, RemoteUserCounts};
use crate::report::format::{cents_to_dollar_string, format_activity_date};

/// Placeholder rendered in the three plan columns for servers without
/// billing data.
pub const MISSING_PLAN_PLACEHOLDER: &str = "---";

/// Column headers, in render order. [`ReportRow::into_cells`] and
/// [`totals_row`] must emit cells in exactly this order.
pub const COLUMNS: [&str; 13] = [
    "ID",
    "Hostname",
    "Contact email",
    "Server version",
    "Last audit log update",
    "Mobile users",
    "Mobile pushes forwarded",
    "Plan name",
    "Plan status",
    "ARR",
    "Non guest users",
    "Guest users",
    "Links",
];

/// A single display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Escaped when rendered.
    Text(String),
    Int(i64),
    /// Inserted verbatim; only the links column uses this.
    Html(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn empty() -> Self {
        Cell::Text(String::new())
    }
}

/// One fully enriched dashboard row.
///
/// Named fields replace the positional index bookkeeping a row-of-values
/// representation would need; the column-order contract lives solely in
/// [`ReportRow::into_cells`].
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub server: ServerActivity,
    pub plan: Option<PlanData>,
    pub user_counts: RemoteUserCounts,
    /// Pre-built markup for the links column: stats link and support link
    /// separated by a single space.
    pub links: String,
}

impl ReportRow {
    /// Materialize the 13 display cells, applying the display-only
    /// substitutions: date formatting, null counts shown as zero, missing
    /// plan data shown as placeholders, revenue cents as a dollar string.
    pub fn into_cells(self) -> Vec<Cell> {
        let ReportRow {
            server,
            plan,
            user_counts,
            links,
        } = self;
        let (plan_name, plan_status, revenue) = match plan {
            Some(plan) => (
                Cell::Text(plan.current_plan_name),
                Cell::Text(plan.current_status),
                Cell::Text(format!(
                    "${}",
                    cents_to_dollar_string(plan.annual_revenue_cents)
                )),
            ),
            None => (
                Cell::text(MISSING_PLAN_PLACEHOLDER),
                Cell::text(MISSING_PLAN_PLACEHOLDER),
                Cell::text(MISSING_PLAN_PLACEHOLDER),
            ),
        };
        vec![
            Cell::Int(server.id),
            Cell::Text(server.hostname),
            Cell::Text(server.contact_email),
            Cell::Text(server.last_version.unwrap_or_default()),
            Cell::Text(format_activity_date(server.last_audit_log_update)),
            Cell::Int(server.push_user_count.unwrap_or(0)),
            Cell::Int(server.push_forwarded_count.unwrap_or(0)),
            plan_name,
            plan_status,
            revenue,
            Cell::Int(user_counts.non_guest_user_count),
            Cell::Int(user_counts.guest_user_count),
            Cell::Html(links),
        ]
    }
}

/// Totals row: the literal `Total` under the id column, sums of the two
/// mobile counts rendered as strings under their columns, blank everywhere
/// else.
///
/// A null count is excluded from its sum, not treated as zero. The sums read
/// the typed, still-nullable rows, so they are independent of the
/// null-to-zero substitution `into_cells` applies for display.
pub fn totals_row(rows: &[ReportRow]) -> Vec<Cell> {
    let mobile_users: i64 = rows
        .iter()
        .filter_map(|row| row.server.push_user_count)
        .sum();
    let pushes_forwarded: i64 = rows
        .iter()
        .filter_map(|row| row.server.push_forwarded_count)
        .sum();
    vec![
        Cell::text("Total"),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::Text(mobile_users.to_string()),
        Cell::Text(pushes_forwarded.to_string()),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
        Cell::empty(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn activity(id: i64) -> ServerActivity {
        ServerActivity {
            id,
            hostname: format!("server{id}.example.com"),
            contact_email: format!("admin@server{id}.example.com"),
            last_version: Some("10.2".into()),
            last_audit_log_update: Some(datetime!(2025-06-01 10:30:00 UTC)),
            push_user_count: Some(12),
            push_forwarded_count: Some(340),
        }
    }

    fn report_row(id: i64) -> ReportRow {
        ReportRow {
            server: activity(id),
            plan: Some(PlanData {
                current_plan_name: "Business".into(),
                current_status: "Active".into(),
                annual_revenue_cents: 123_456,
            }),
            user_counts: RemoteUserCounts {
                non_guest_user_count: 40,
                guest_user_count: 2,
            },
            links: "<a href=\"#\">stats</a> <a href=\"#\">support</a>".into(),
        }
    }

    #[test]
    fn cells_line_up_with_the_column_headers() {
        let cells = report_row(7).into_cells();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], Cell::Int(7));
        assert_eq!(cells[1], Cell::text("server7.example.com"));
        assert_eq!(cells[4], Cell::text("2025-06-01 10:30"));
        assert_eq!(cells[5], Cell::Int(12));
        assert_eq!(cells[6], Cell::Int(340));
        assert_eq!(cells[9], Cell::text("$1,234.56"));
        assert_eq!(cells[10], Cell::Int(40));
        assert_eq!(cells[11], Cell::Int(2));
        assert!(matches!(cells[12], Cell::Html(_)));
    }

    #[test]
    fn missing_plan_renders_placeholders() {
        let mut row = report_row(1);
        row.plan = None;
        let cells = row.into_cells();
        assert_eq!(cells[7], Cell::text(MISSING_PLAN_PLACEHOLDER));
        assert_eq!(cells[8], Cell::text(MISSING_PLAN_PLACEHOLDER));
        assert_eq!(cells[9], Cell::text(MISSING_PLAN_PLACEHOLDER));
    }

    #[test]
    fn null_counts_display_as_zero() {
        let mut row = report_row(1);
        row.server.push_user_count = None;
        row.server.push_forwarded_count = None;
        let cells = row.into_cells();
        assert_eq!(cells[5], Cell::Int(0));
        assert_eq!(cells[6], Cell::Int(0));
    }

    #[test]
    fn missing_audit_timestamp_renders_blank() {
        let mut row = report_row(1);
        row.server.last_audit_log_update = None;
        let cells = row.into_cells();
        assert_eq!(cells[4], Cell::empty());
    }

    #[test]
    fn totals_sum_counts_and_label_the_id_column() {
        let rows = vec![report_row(1), report_row(2)];
        let totals = totals_row(&rows);
        assert_eq!(totals.len(), COLUMNS.len());
        assert_eq!(totals[0], Cell::text("Total"));
        assert_eq!(totals[5], Cell::text("24"));
        assert_eq!(totals[6], Cell::text("680"));
        assert_eq!(totals[1], Cell::empty());
        assert_eq!(totals[12], Cell::empty());
    }

    #[test]
    fn totals_exclude_null_counts_instead_of_zeroing_them() {
        let mut with_nulls = report_row(2);
        with_nulls.server.push_user_count = None;
        with_nulls.server.push_forwarded_count = None;
        let rows = vec![report_row(1), with_nulls];
        let totals = totals_row(&rows);
        assert_eq!(totals[5], Cell::text("12"));
        assert_eq!(totals[6], Cell::text("340"));
    }

    #[test]
    fn totals_of_no_rows_are_zero() {
        let totals = totals_row(&[]);
        assert_eq!(totals[5], Cell::text("0"));
        assert_eq!(totals[6], Cell::text("0"));
    }
}
