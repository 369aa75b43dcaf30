//! The aggregation query joining remote servers with their push metrics.

use crate::error::ReportError;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use time::OffsetDateTime;

/// Counter property holding the daily push-forwarding volume.
pub const PUSH_FORWARDED_PROPERTY: &str = "mobile_pushes_forwarded::day";

/// One non-deactivated server with its pre-aggregated push metrics.
///
/// Both counts stay `None` for servers without any push activity, which keeps
/// "no activity" distinguishable from "activity of zero"; the null-to-zero
/// substitution is display-only and happens in the formatting pass.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ServerActivity {
    pub id: i64,
    pub hostname: String,
    pub contact_email: String,
    pub last_version: Option<String>,
    pub last_audit_log_update: Option<OffsetDateTime>,
    pub push_user_count: Option<i64>,
    pub push_forwarded_count: Option<i64>,
}

/// Fetch one row per active server, ordered by mobile-user count descending
/// with nulls last.
///
/// Two pre-aggregated subqueries are left-joined onto the server table so
/// servers with no push activity still appear: the 7-day sum of the
/// push-forwarding counter, and the count of distinct `(user_id, user_uuid)`
/// pairs among registered devices. This uses backend-specific SQL for the
/// date arithmetic and the distinct-pair count.
#[tracing::instrument(skip(db))]
pub async fn fetch_server_activity(
    db: &DatabaseConnection,
) -> Result<Vec<ServerActivity>, ReportError> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => {
            r#"
            with mobile_push_forwarded_count as (
                select
                    server_id,
                    sum(coalesce(value, 0))::bigint as push_forwarded_count
                from remote_installation_count
                where
                    property = $1
                    and end_time >= current_timestamp(0) - interval '7 days'
                group by server_id
            ),
            remote_push_devices as (
                select
                    server_id,
                    count(distinct (user_id, user_uuid)) as push_user_count
                from remote_push_device_token
                group by server_id
            )
            select
                rserver.id,
                rserver.hostname,
                rserver.contact_email,
                rserver.last_version,
                rserver.last_audit_log_update,
                push_user_count,
                push_forwarded_count
            from remote_server rserver
            left join mobile_push_forwarded_count
                on mobile_push_forwarded_count.server_id = rserver.id
            left join remote_push_devices
                on remote_push_devices.server_id = rserver.id
            where not rserver.deactivated
            order by push_user_count desc nulls last
            "#
        }
        // SQLite stores timestamps as text and has no row-value DISTINCT;
        // concatenate the pair instead.
        DatabaseBackend::Sqlite => {
            r#"
            with mobile_push_forwarded_count as (
                select
                    server_id,
                    sum(coalesce(value, 0)) as push_forwarded_count
                from remote_installation_count
                where
                    property = ?
                    and end_time >= datetime('now', '-7 days')
                group by server_id
            ),
            remote_push_devices as (
                select
                    server_id,
                    count(distinct coalesce(user_id, '') || ':' || coalesce(user_uuid, '')) as push_user_count
                from remote_push_device_token
                group by server_id
            )
            select
                rserver.id,
                rserver.hostname,
                rserver.contact_email,
                rserver.last_version,
                rserver.last_audit_log_update,
                push_user_count,
                push_forwarded_count
            from remote_server rserver
            left join mobile_push_forwarded_count
                on mobile_push_forwarded_count.server_id = rserver.id
            left join remote_push_devices
                on remote_push_devices.server_id = rserver.id
            where not rserver.deactivated
            order by push_user_count desc nulls last
            "#
        }
        // MySQL has no NULLS LAST; sort on the null flag first.
        DatabaseBackend::MySql => {
            r#"
            with mobile_push_forwarded_count as (
                select
                    server_id,
                    cast(sum(coalesce(value, 0)) as signed) as push_forwarded_count
                from remote_installation_count
                where
                    property = ?
                    and end_time >= now() - interval 7 day
                group by server_id
            ),
            remote_push_devices as (
                select
                    server_id,
                    count(distinct user_id, user_uuid) as push_user_count
                from remote_push_device_token
                group by server_id
            )
            select
                rserver.id,
                rserver.hostname,
                rserver.contact_email,
                rserver.last_version,
                rserver.last_audit_log_update,
                push_user_count,
                push_forwarded_count
            from remote_server rserver
            left join mobile_push_forwarded_count
                on mobile_push_forwarded_count.server_id = rserver.id
            left join remote_push_devices
                on remote_push_devices.server_id = rserver.id
            where not rserver.deactivated
            order by push_user_count is null, push_user_count desc
            "#
        }
    };

    let stmt =
        Statement::from_sql_and_values(backend, sql, vec![PUSH_FORWARDED_PROPERTY.into()]);
    let rows = ServerActivity::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}
