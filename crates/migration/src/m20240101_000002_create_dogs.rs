//! Create `dogs` table.
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
                    .table(Dogs::Table)
                    .if_not_exists()
                    .col(uuid(Dogs::Id).primary_key())
                    .col(string(Dogs::Name).check(Expr::cust("trim(name) <> ''")))
                    .col(string(Dogs::Breed))
                    .col(string(Dogs::Color))
                    .col(timestamp_with_time_zone(Dogs::Birthdate))
                    .col(double(Dogs::Weight))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dogs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dogs { Table, Id, Name, Breed, Color, Birthdate, Weight }
