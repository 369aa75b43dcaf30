use sea_orm::entity::prelude::*;

/// Billing projection maintained by the plan service. A server without a row
/// here simply has no plan data; that is a valid state, not an error.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "remote_server_plan")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub server_id: i64,
    pub current_plan_name: String,
    pub current_status: String,
    pub annual_revenue_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
