use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "EduPath API is running"
    }))
}

/// GET /api
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to EduPath API - Your Career & Education Advisory Platform"
    }))
}
