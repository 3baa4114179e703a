use axum::{
    Router,
    routing::{get, post},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::relay::Relay;

pub mod handlers;
pub mod models;

pub fn create_router(relay: Arc<Relay>, static_dir: Option<PathBuf>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/health", get(handlers::health_handler))
        .route("/api/search", post(handlers::search_handler))
        .route("/api/explore", get(handlers::explore_handler))
        .with_state(relay);

    // Built front end, if one is deployed next to the relay
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
