pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/analyze", post(handle_analyze))
        // Uploads are unbounded; no size cap is enforced on documents.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
