pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_remote_server_tables;
mod m20260729_000002_add_billing_projections;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_remote_server_tables::Migration),
            Box::new(m20260729_000002_add_billing_projections::Migration),
        ]
    }
}
