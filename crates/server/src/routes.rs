use std::{sync::Arc, time::Duration};

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::MessageBody;
use models::{Cat, Dog};
use sea_orm::DatabaseConnection;
use service::pets::{PetRepository, PetService, SeaOrmPetRepository};

pub mod pets;

/// Services injected into the router at startup; nothing is global.
pub struct AppState<C, D>
where
    C: PetRepository<Pet = Cat>,
    D: PetRepository<Pet = Dog>,
{
    pub cats: Arc<PetService<C>>,
    pub dogs: Arc<PetService<D>>,
}

pub type DbAppState = AppState<SeaOrmPetRepository<Cat>, SeaOrmPetRepository<Dog>>;

impl DbAppState {
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            cats: Arc::new(PetService::new(Arc::new(SeaOrmPetRepository::new(db.clone())))),
            dogs: Arc::new(PetService::new(Arc::new(SeaOrmPetRepository::new(db)))),
        }
    }
}

pub async fn health() -> Json<MessageBody> {
    Json(MessageBody::new("ok"))
}

/// Build the full application router: health check plus one route set per pet table.
pub fn build_router<C, D>(state: AppState<C, D>, cors: CorsLayer, request_timeout: Duration) -> Router
where
    C: PetRepository<Pet = Cat> + 'static,
    D: PetRepository<Pet = Dog> + 'static,
{
    Router::new()
        .route("/health", get(health))
        .merge(pets::pet_routes(state.cats))
        .merge(pets::pet_routes(state.dogs))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
