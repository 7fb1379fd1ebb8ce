//! Migrator registering one table per pet kind.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_cats;
mod m20240101_000002_create_dogs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cats::Migration),
            Box::new(m20240101_000002_create_dogs::Migration),
        ]
    }
}
