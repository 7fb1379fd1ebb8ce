use std::sync::Arc;

use models::Pet;
use tracing::{info, instrument};
use uuid::Uuid;

use super::filter::PetFilter;
use super::repository::PetRepository;
use crate::errors::ServiceError;

/// Application service for one pet table. Each operation is a single
/// repository call; dropping the returned future cancels the query.
pub struct PetService<R: PetRepository> {
    repo: Arc<R>,
}

impl<R: PetRepository> PetService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Insert `pet`, assigning a fresh id when the payload carries the nil id.
    #[instrument(skip_all, fields(kind = <R::Pet as Pet>::KIND))]
    pub async fn add(&self, mut pet: R::Pet) -> Result<Uuid, ServiceError> {
        if pet.id().is_nil() {
            pet.set_id(Uuid::new_v4());
        }
        pet.validate()?;
        let id = pet.id();
        self.repo.insert(pet).await?;
        info!(%id, "pet_added");
        Ok(id)
    }

    #[instrument(skip(self), fields(kind = <R::Pet as Pet>::KIND))]
    pub async fn get(&self, filter: PetFilter) -> Result<Vec<R::Pet>, ServiceError> {
        self.repo.find(filter).await
    }

    #[instrument(skip(self), fields(kind = <R::Pet as Pet>::KIND))]
    pub async fn get_one(&self, id: Uuid) -> Result<R::Pet, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(<R::Pet as Pet>::KIND))
    }

    /// Replace the attributes of `id` with those of `pet`; the id itself is kept.
    #[instrument(skip(self, pet), fields(kind = <R::Pet as Pet>::KIND))]
    pub async fn update(&self, id: Uuid, pet: R::Pet) -> Result<(), ServiceError> {
        pet.validate()?;
        if self.repo.update(id, pet).await? == 0 {
            return Err(ServiceError::not_found(<R::Pet as Pet>::KIND));
        }
        info!(%id, "pet_updated");
        Ok(())
    }

    #[instrument(skip(self), fields(kind = <R::Pet as Pet>::KIND))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? == 0 {
            return Err(ServiceError::not_found(<R::Pet as Pet>::KIND));
        }
        info!(%id, "pet_deleted");
        Ok(())
    }
}
