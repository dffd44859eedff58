use crate::health::{health_check, liveness_check, readiness_check};

use std::path::Path;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::get,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

const NO_STORE: &str = "no-store";

/// Build the dashboard router: health endpoints plus the asset directory.
///
/// With `no_cache`, every response carries `Cache-Control: no-store` so a
/// browser always sees the current files.
pub fn build_router(asset_dir: &Path, no_cache: bool) -> Router {
    let assets = ServeDir::new(asset_dir).append_index_html_on_directories(true);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
        .route("/ready", get(readiness_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http());

    if no_cache {
        router.layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_STORE),
        ))
    } else {
        router
    }
}
