pub use sea_orm_migration::prelude::*;

mod m20260807_000001_driver;
mod m20260807_000002_customer;
mod m20260807_000003_customer_confirmation;
mod m20260807_000004_complaint;
mod m20260807_000005_complaint_evidence;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260807_000001_driver::Migration),
            Box::new(m20260807_000002_customer::Migration),
            Box::new(m20260807_000003_customer_confirmation::Migration),
            Box::new(m20260807_000004_complaint::Migration),
            Box::new(m20260807_000005_complaint_evidence::Migration),
        ]
    }
}
