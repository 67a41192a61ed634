pub use sea_orm_migration::prelude::*;

mod m20251101_000001_house;
mod m20251101_000002_house_section;
mod m20251101_000003_task;
mod m20251101_000004_star;
mod m20251101_000005_house_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_house::Migration),
            Box::new(m20251101_000002_house_section::Migration),
            Box::new(m20251101_000003_task::Migration),
            Box::new(m20251101_000004_star::Migration),
            Box::new(m20251101_000005_house_user::Migration),
        ]
    }
}
