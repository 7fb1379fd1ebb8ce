use async_trait::async_trait;
use models::Pet;
use uuid::Uuid;

use super::filter::PetFilter;
use crate::errors::ServiceError;

/// Persistence for one pet table. Writes report affected rows so callers
/// can tell a missing id apart from a successful no-op.
#[async_trait]
pub trait PetRepository: Send + Sync {
    type Pet: Pet;

    async fn insert(&self, pet: Self::Pet) -> Result<(), ServiceError>;
    async fn find(&self, filter: PetFilter) -> Result<Vec<Self::Pet>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Pet>, ServiceError>;
    /// Replace every non-id attribute of the row matching `id`.
    async fn update(&self, id: Uuid, pet: Self::Pet) -> Result<u64, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::marker::PhantomData;
    use std::sync::{Mutex, MutexGuard};

    pub struct MockPetRepository<T> {
        rows: Mutex<Vec<T>>, // insertion order
        _pet: PhantomData<fn() -> T>,
    }

    impl<T: Pet> Default for MockPetRepository<T> {
        fn default() -> Self { Self::with_rows(Vec::new()) }
    }

    impl<T: Pet> MockPetRepository<T> {
        pub fn with_rows(rows: Vec<T>) -> Self {
            Self { rows: Mutex::new(rows), _pet: PhantomData }
        }

        fn rows(&self) -> Result<MutexGuard<'_, Vec<T>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
        }
    }

    #[async_trait]
    impl<T: Pet> PetRepository for MockPetRepository<T> {
        type Pet = T;

        async fn insert(&self, pet: T) -> Result<(), ServiceError> {
            let mut rows = self.rows()?;
            if rows.iter().any(|p| p.id() == pet.id()) {
                return Err(ServiceError::Db(format!("duplicate key {}", pet.id())));
            }
            rows.push(pet);
            Ok(())
        }

        async fn find(&self, filter: PetFilter) -> Result<Vec<T>, ServiceError> {
            Ok(self.rows()?.iter().filter(|p| filter.matches(*p)).cloned().collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
            Ok(self.rows()?.iter().find(|p| p.id() == id).cloned())
        }

        async fn update(&self, id: Uuid, mut pet: T) -> Result<u64, ServiceError> {
            let mut rows = self.rows()?;
            match rows.iter_mut().find(|p| p.id() == id) {
                Some(row) => {
                    pet.set_id(id);
                    *row = pet;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
            let mut rows = self.rows()?;
            let before = rows.len();
            rows.retain(|p| p.id() != id);
            Ok((before - rows.len()) as u64)
        }
    }
}
