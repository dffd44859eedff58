use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - Server identity and version
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "service": "dd-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check
pub async fn readiness_check() -> Response {
    // Static assets need no warm-up; answering at all means ready.
    (StatusCode::OK, "Ready").into_response()
}
