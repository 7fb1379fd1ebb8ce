#![allow(dead_code)]

use std::time::Duration;

use axum::{body::Body, http::Request, response::Response, Router};
use configs::DatabaseConfig;
use http_body_util::BodyExt;
use migration::MigratorTrait;
use models::{Cat, Dog};
use sea_orm::DatabaseConnection;
use server::routes::{build_router, DbAppState};
use service::pets::{PetRepository, SeaOrmPetRepository};
use tower_http::cors::CorsLayer;

pub struct Seeded {
    pub db: DatabaseConnection,
    pub cats: Vec<Cat>,
    pub dogs: Vec<Dog>,
}

pub fn fixture_cats() -> Vec<Cat> {
    serde_json::from_str(include_str!("../fixtures/cats.json")).expect("cats fixture")
}

pub fn fixture_dogs() -> Vec<Dog> {
    serde_json::from_str(include_str!("../fixtures/dogs.json")).expect("dogs fixture")
}

/// In-memory database, migrated and seeded from the JSON fixtures.
pub async fn setup() -> anyhow::Result<Seeded> {
    let db = models::db::connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let cats = fixture_cats();
    let cat_repo = SeaOrmPetRepository::<Cat>::new(db.clone());
    for cat in &cats {
        cat_repo.insert(cat.clone()).await?;
    }
    let dogs = fixture_dogs();
    let dog_repo = SeaOrmPetRepository::<Dog>::new(db.clone());
    for dog in &dogs {
        dog_repo.insert(dog.clone()).await?;
    }
    Ok(Seeded { db, cats, dogs })
}

pub async fn teardown(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::down(db, None).await?;
    Ok(())
}

pub fn app(db: DatabaseConnection) -> Router {
    build_router(DbAppState::from_db(db), CorsLayer::very_permissive(), Duration::from_secs(5))
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request")
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
