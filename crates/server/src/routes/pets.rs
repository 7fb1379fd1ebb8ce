//! Handlers shared by every pet table, mounted at `/{table}` and `/{table}/:id`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DeletedBody;
use models::Pet;
use serde::Deserialize;
use service::pets::{PetFilter, PetRepository, PetService};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::ApiError;

type PetState<R> = State<Arc<PetService<R>>>;

/// Optional equality filters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
}

impl From<ListQuery> for PetFilter {
    fn from(q: ListQuery) -> Self {
        PetFilter::from_fields(q.name, q.breed, q.color)
    }
}

pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(v)| v).map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected request body");
        ApiError::InvalidBody
    })
}

/// Routes for one pet table, with its service as state.
pub fn pet_routes<R>(service: Arc<PetService<R>>) -> Router
where
    R: PetRepository + 'static,
{
    let collection = format!("/{}", <R::Pet as Pet>::TABLE);
    let member = format!("{collection}/:id");
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&member, get(get_one::<R>).put(update::<R>).delete(delete::<R>))
        .with_state(service)
}

pub async fn list<R: PetRepository>(
    State(svc): PetState<R>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<R::Pet>>, ApiError> {
    let pets = svc.get(q.into()).await?;
    info!(kind = <R::Pet as Pet>::KIND, count = pets.len(), "listed pets");
    Ok(Json(pets))
}

pub async fn get_one<R: PetRepository>(
    State(svc): PetState<R>,
    Path(id): Path<String>,
) -> Result<Json<R::Pet>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(svc.get_one(id).await?))
}

pub async fn create<R: PetRepository>(
    State(svc): PetState<R>,
    body: Result<Json<R::Pet>, JsonRejection>,
) -> Result<(StatusCode, Json<R::Pet>), ApiError> {
    let mut pet = parse_body(body)?;
    let id = svc.add(pet.clone()).await?;
    pet.set_id(id);
    info!(kind = <R::Pet as Pet>::KIND, %id, "created pet");
    Ok((StatusCode::CREATED, Json(pet)))
}

pub async fn update<R: PetRepository>(
    State(svc): PetState<R>,
    Path(id): Path<String>,
    body: Result<Json<R::Pet>, JsonRejection>,
) -> Result<Json<R::Pet>, ApiError> {
    let id = parse_id(&id)?;
    let mut pet = parse_body(body)?;
    pet.set_id(id);
    svc.update(id, pet.clone()).await?;
    info!(kind = <R::Pet as Pet>::KIND, %id, "updated pet");
    Ok(Json(pet))
}

pub async fn delete<R: PetRepository>(
    State(svc): PetState<R>,
    Path(id): Path<String>,
) -> Result<Json<DeletedBody>, ApiError> {
    let id = parse_id(&id)?;
    svc.delete(id).await?;
    info!(kind = <R::Pet as Pet>::KIND, %id, "deleted pet");
    Ok(Json(DeletedBody { deleted: id }))
}
