use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RemoteServerPlan::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RemoteServerPlan::ServerId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RemoteServerPlan::CurrentPlanName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemoteServerPlan::CurrentStatus)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemoteServerPlan::AnnualRevenueCents)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RemoteServerUserCount::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RemoteServerUserCount::ServerId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RemoteServerUserCount::NonGuestCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RemoteServerUserCount::GuestCount)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(RemoteServerUserCount::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(RemoteServerPlan::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RemoteServerPlan {
    Table,
    ServerId,
    CurrentPlanName,
    CurrentStatus,
    AnnualRevenueCents,
}

#[derive(Iden)]
enum RemoteServerUserCount {
    Table,
    ServerId,
    NonGuestCount,
    GuestCount,
}
