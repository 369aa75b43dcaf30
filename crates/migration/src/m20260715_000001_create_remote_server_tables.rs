use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RemoteServer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RemoteServer::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RemoteServer::Uuid).uuid().not_null())
                    .col(ColumnDef::new(RemoteServer::Hostname).string().not_null())
                    .col(
                        ColumnDef::new(RemoteServer::ContactEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RemoteServer::LastVersion).string().null())
                    .col(
                        ColumnDef::new(RemoteServer::LastAuditLogUpdate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RemoteServer::Deactivated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_remote_server_hostname_unique")
                    .table(RemoteServer::Table)
                    .col(RemoteServer::Hostname)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RemoteInstallationCount::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RemoteInstallationCount::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RemoteInstallationCount::ServerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemoteInstallationCount::Property)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemoteInstallationCount::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemoteInstallationCount::Value)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        // The dashboard aggregation filters on property + end_time and groups
        // by server.
        manager
            .create_index(
                Index::create()
                    .name("idx_remote_installation_count_property_end_time")
                    .table(RemoteInstallationCount::Table)
                    .col(RemoteInstallationCount::Property)
                    .col(RemoteInstallationCount::EndTime)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_remote_installation_count_server_id")
                    .table(RemoteInstallationCount::Table)
                    .col(RemoteInstallationCount::ServerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RemotePushDeviceToken::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RemotePushDeviceToken::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RemotePushDeviceToken::ServerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemotePushDeviceToken::UserId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RemotePushDeviceToken::UserUuid)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RemotePushDeviceToken::Token)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_remote_push_device_token_server_id")
                    .table(RemotePushDeviceToken::Table)
                    .col(RemotePushDeviceToken::ServerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RemotePushDeviceToken::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(RemoteInstallationCount::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(RemoteServer::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RemoteServer {
    Table,
    Id,
    Uuid,
    Hostname,
    ContactEmail,
    LastVersion,
    LastAuditLogUpdate,
    Deactivated,
}

#[derive(Iden)]
enum RemoteInstallationCount {
    Table,
    Id,
    ServerId,
    Property,
    EndTime,
    Value,
}

#[derive(Iden)]
enum RemotePushDeviceToken {
    Table,
    Id,
    ServerId,
    UserId,
    UserUuid,
    Token,
}
