use std::path::Path;

use axum::{routing::get, Router};
use contracts::shared::public_config::CONFIG_ENDPOINT;
use tower_http::services::ServeDir;

use crate::handlers;

/// All routes: health check, configuration endpoint, dashboard bundle
pub fn configure_routes(static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            CONFIG_ENDPOINT,
            get(handlers::config::get_public_config)
                .fallback(handlers::config::method_not_allowed),
        )
        // index.html, wasm bundle and the /views/*.html fragments
        .fallback_service(ServeDir::new(static_dir))
}
