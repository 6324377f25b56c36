// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_chart, get_heatmap, get_legend, get_sensor, get_snapshot, health_check, list_channels,
    list_sensors, refresh, stream_snapshots,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Responses are compressed per handler, so no CompressionLayer here
    Router::new()
        .route("/healthz", get(health_check))
        .route("/snapshot", get(get_snapshot))
        .route("/snapshot/stream", get(stream_snapshots))
        .route("/refresh", post(refresh))
        .route("/channels", get(list_channels))
        .route("/sensors", get(list_sensors))
        .route("/sensors/:key", get(get_sensor))
        .route("/heatmap/:field", get(get_heatmap))
        .route("/chart", get(get_chart))
        .route("/legend/:category", get(get_legend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
