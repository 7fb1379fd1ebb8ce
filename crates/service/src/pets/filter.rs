use models::{Pet, PetField};
use sea_orm::Value;

/// Narrowing applied by [`PetService::get`](super::PetService::get).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PetFilter {
    #[default]
    All,
    /// Every condition must hold.
    Where(Vec<FieldEq>),
}

/// Equality on one text column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEq {
    Name(String),
    Breed(String),
    Color(String),
}

impl FieldEq {
    pub fn field(&self) -> PetField {
        match self {
            FieldEq::Name(_) => PetField::Name,
            FieldEq::Breed(_) => PetField::Breed,
            FieldEq::Color(_) => PetField::Color,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FieldEq::Name(v) | FieldEq::Breed(v) | FieldEq::Color(v) => v,
        }
    }

    pub fn matches<T: Pet>(&self, pet: &T) -> bool {
        pet.value(self.field()) == Value::from(self.value().to_owned())
    }
}

impl PetFilter {
    /// Build from optional equality inputs; no inputs means [`PetFilter::All`].
    pub fn from_fields(name: Option<String>, breed: Option<String>, color: Option<String>) -> Self {
        let conds: Vec<FieldEq> = [
            name.map(FieldEq::Name),
            breed.map(FieldEq::Breed),
            color.map(FieldEq::Color),
        ]
        .into_iter()
        .flatten()
        .collect();
        if conds.is_empty() { PetFilter::All } else { PetFilter::Where(conds) }
    }

    pub fn matches<T: Pet>(&self, pet: &T) -> bool {
        match self {
            PetFilter::All => true,
            PetFilter::Where(conds) => conds.iter().all(|c| c.matches(pet)),
        }
    }
}
