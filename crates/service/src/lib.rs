//! Service layer providing CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - One generic service serves every pet table.

pub mod errors;
pub mod pets;
#[cfg(test)]
pub mod test_support;
