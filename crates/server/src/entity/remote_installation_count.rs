use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// Daily usage counters reported by remote installations. The push-forwarding
/// volume lives under the property `mobile_pushes_forwarded::day`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "remote_installation_count")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub server_id: i64,
    pub property: String,
    pub end_time: OffsetDateTime,
    pub value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
