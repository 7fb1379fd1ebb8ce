use sea_orm::{entity::prelude::*, Value};
use serde::{Deserialize, Serialize};

use crate::pet::{default_birthdate, Pet, PetField};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_birthdate")]
    pub birthdate: DateTimeWithTimeZone,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Pet for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    const KIND: &'static str = "dog";
    const TABLE: &'static str = "dogs";

    fn id(&self) -> Uuid { self.id }
    fn set_id(&mut self, id: Uuid) { self.id = id; }
    fn name(&self) -> &str { &self.name }

    fn column(field: PetField) -> Column {
        match field {
            PetField::Id => Column::Id,
            PetField::Name => Column::Name,
            PetField::Breed => Column::Breed,
            PetField::Color => Column::Color,
            PetField::Birthdate => Column::Birthdate,
            PetField::Weight => Column::Weight,
        }
    }

    fn value(&self, field: PetField) -> Value {
        match field {
            PetField::Id => self.id.into(),
            PetField::Name => self.name.clone().into(),
            PetField::Breed => self.breed.clone().into(),
            PetField::Color => self.color.clone().into(),
            PetField::Birthdate => self.birthdate.into(),
            PetField::Weight => self.weight.into(),
        }
    }

    fn into_active(self) -> ActiveModel { self.into() }
}
