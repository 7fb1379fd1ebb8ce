//! CRUD over any [`models::Pet`] table.
//!
//! - `filter`: structured narrowing for list queries
//! - `repository`: persistence trait plus an in-memory mock
//! - `seaorm`: the database-backed repository
//! - `service`: the operations exposed to HTTP handlers

pub mod filter;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use filter::{FieldEq, PetFilter};
pub use repository::PetRepository;
pub use seaorm::SeaOrmPetRepository;
pub use service::PetService;
