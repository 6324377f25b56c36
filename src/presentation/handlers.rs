// HTTP request handlers
use crate::application::views::{build_chart, build_heatmap, build_legend, sensor_tabs};
use crate::domain::sensor::{sensor_config_for_key, SensorField};
use crate::domain::threshold::ThresholdCategory;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_stream::stream_from_receiver;
use crate::infrastructure::snapshot_mapper::{channel_to_dto, state_to_dto, ChannelDto};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

fn respond(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard state: loading/error flags, last snapshot and update time
pub async fn get_snapshot(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let current = state.store.current();
    respond(json_response(&state_to_dto(&current), accepts_brotli(&headers)).await)
}

/// Run a fetch cycle now (manual retry) and return the resulting state
pub async fn refresh(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    tracing::info!("Manual refresh requested");
    let current = state.store.refresh().await;
    respond(json_response(&state_to_dto(&current), accepts_brotli(&headers)).await)
}

/// Channel list for the channel selector
pub async fn list_channels(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let current = state.store.current();
    let channels: Vec<ChannelDto> = current
        .snapshot
        .as_deref()
        .map(|s| s.channels.iter().map(channel_to_dto).collect())
        .unwrap_or_default();
    respond(json_response(&channels, accepts_brotli(&headers)).await)
}

/// Sensor catalogue with per-sensor data availability
pub async fn list_sensors(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let current = state.store.current();
    let slots = current.snapshot.as_deref().map(|s| s.slots.as_slice()).unwrap_or_default();
    respond(json_response(&sensor_tabs(slots), accepts_brotli(&headers)).await)
}

/// Configuration of one sensor key; unknown keys get the generic record
pub async fn get_sensor(Path(key): Path<String>, headers: HeaderMap) -> Response {
    respond(json_response(&sensor_config_for_key(&key), accepts_brotli(&headers)).await)
}

/// Heatmap of one sensor field, one cell per channel
pub async fn get_heatmap(
    Path(field): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(field) = SensorField::from_key(&field) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let current = state.store.current();
    let Some(snapshot) = current.snapshot.as_deref() else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    let heatmap = build_heatmap(&snapshot.slots, field);
    respond(json_response(&heatmap, accepts_brotli(&headers)).await)
}

/// Chart rows for the line/bar views
pub async fn get_chart(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let current = state.store.current();
    let Some(snapshot) = current.snapshot.as_deref() else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    respond(json_response(&build_chart(&snapshot.slots), accepts_brotli(&headers)).await)
}

/// Color legend of a threshold category; unknown names get the generic scale
pub async fn get_legend(Path(category): Path<String>, headers: HeaderMap) -> Response {
    let legend = build_legend(ThresholdCategory::from_name(&category));
    respond(json_response(&legend, accepts_brotli(&headers)).await)
}

/// Stream dashboard state as newline-delimited JSON, one line per change
pub async fn stream_snapshots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    stream_from_receiver(state.store.subscribe())
}
