//! Create `cats` table.
//!
//! A name that is empty once spaces are trimmed is rejected by a CHECK
//! constraint, the same rule `validate_name` applies in the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cats::Table)
                    .if_not_exists()
                    .col(uuid(Cats::Id).primary_key())
                    .col(string(Cats::Name).check(Expr::cust("trim(name) <> ''")))
                    .col(string(Cats::Breed))
                    .col(string(Cats::Color))
                    .col(timestamp_with_time_zone(Cats::Birthdate))
                    .col(double(Cats::Weight))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cats::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cats { Table, Id, Name, Breed, Color, Birthdate, Weight }
