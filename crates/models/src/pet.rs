//! Shape shared by every pet table.
//!
//! Cats and dogs are separate tables with identical columns. `Pet` exposes
//! that shape so the repository, service, and HTTP layers are written once.

use std::fmt::Debug;

use sea_orm::{entity::prelude::*, ActiveModelBehavior, Value};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// Columns of a pet table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PetField {
    Id,
    Name,
    Breed,
    Color,
    Birthdate,
    Weight,
}

impl PetField {
    /// Every column except the primary key, i.e. what an update replaces.
    pub const ATTRIBUTES: [PetField; 5] = [
        PetField::Name,
        PetField::Breed,
        PetField::Color,
        PetField::Birthdate,
        PetField::Weight,
    ];
}

pub trait Pet: Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Entity: EntityTrait<Model = Self>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    /// Singular name, e.g. `cat`.
    const KIND: &'static str;
    /// Table name, also the HTTP path segment.
    const TABLE: &'static str;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn name(&self) -> &str;

    fn column(field: PetField) -> <Self::Entity as EntityTrait>::Column;
    fn value(&self, field: PetField) -> Value;
    fn into_active(self) -> Self::ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        validate_name(self.name())
    }
}

/// A name must keep at least one character once spaces are trimmed, matching
/// the `trim(name) <> ''` table constraint.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim_matches(' ').is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

/// Birthdate used when a payload omits it.
pub fn default_birthdate() -> DateTimeWithTimeZone {
    // Unix epoch at offset +00:00
    DateTimeWithTimeZone::default()
}
