pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::campaign::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Image references returned by /generate are relative to this root.
    let images = ServeDir::new(state.storage.root().to_path_buf());

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .nest_service("/images", images)
        .with_state(state)
}
