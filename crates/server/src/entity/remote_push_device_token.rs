use sea_orm::entity::prelude::*;

/// Mobile device registrations forwarded by remote installations. Older
/// installations report only `user_id`, newer ones only `user_uuid`, so both
/// are nullable and a mobile user is identified by the pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "remote_push_device_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub server_id: i64,
    pub user_id: Option<i64>,
    pub user_uuid: Option<Uuid>,
    pub token: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
