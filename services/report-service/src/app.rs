use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{greeting, report_font_use, status};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/api/v1/status", get(status))
        .route("/api/v1/report-font-use", post(report_font_use))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
