use sea_orm::entity::prelude::*;

/// Guest/non-guest account totals per remote server, maintained by the
/// audit-log ingestion pipeline.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "remote_server_user_count")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub server_id: i64,
    pub non_guest_count: i64,
    pub guest_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
