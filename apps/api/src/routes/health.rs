use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Spark Studio API";

/// GET /
/// Liveness payload for the hosting platform.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": format!("{SERVICE_NAME} is running")
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}
