use std::marker::PhantomData;

use async_trait::async_trait;
use models::{Pet, PetField};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel,
    QueryFilter,
};
use uuid::Uuid;

use super::filter::PetFilter;
use super::repository::PetRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation. Every method issues exactly one statement.
pub struct SeaOrmPetRepository<T> {
    pub db: DatabaseConnection,
    _pet: PhantomData<fn() -> T>,
}

impl<T: Pet> SeaOrmPetRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _pet: PhantomData }
    }
}

fn id_eq<T: Pet>(id: Uuid) -> sea_orm::sea_query::SimpleExpr {
    T::column(PetField::Id).eq(id)
}

#[async_trait]
impl<T> PetRepository for SeaOrmPetRepository<T>
where
    T: Pet + FromQueryResult + IntoActiveModel<T::ActiveModel>,
{
    type Pet = T;

    async fn insert(&self, pet: T) -> Result<(), ServiceError> {
        T::Entity::insert(pet.into_active())
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn find(&self, filter: PetFilter) -> Result<Vec<T>, ServiceError> {
        let mut select = T::Entity::find();
        if let PetFilter::Where(conds) = filter {
            for cond in conds {
                select = select.filter(T::column(cond.field()).eq(cond.value()));
            }
        }
        Ok(select.all(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
        Ok(T::Entity::find().filter(id_eq::<T>(id)).one(&self.db).await?)
    }

    async fn update(&self, id: Uuid, pet: T) -> Result<u64, ServiceError> {
        let mut update = T::Entity::update_many().filter(id_eq::<T>(id));
        for field in PetField::ATTRIBUTES {
            update = update.col_expr(T::column(field), Expr::value(pet.value(field)));
        }
        let res = update.exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
        let res = T::Entity::delete_many().filter(id_eq::<T>(id)).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
