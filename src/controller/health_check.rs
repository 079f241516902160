use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route("/ping", get(ping))
}

/// Misc endpoint for individual use case
async fn get_health_check() -> Result<StatusCode, StatusCode>
{
    Ok(StatusCode::OK)
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}
