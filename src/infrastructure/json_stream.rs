// Newline-delimited JSON streaming of dashboard state
use crate::application::dashboard_store::DashboardState;
use crate::infrastructure::snapshot_mapper::state_to_dto;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use tokio::sync::watch;

/// Serialize one state as a single NDJSON line
pub fn serialize_line(state: &DashboardState) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(&state_to_dto(state))?;
    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');
    Ok(line.freeze())
}

/// Current state first, then one line per change until the store goes away.
pub fn state_stream(
    mut rx: watch::Receiver<DashboardState>,
) -> impl Stream<Item = DashboardState> + Send + 'static {
    async_stream::stream! {
        let initial = rx.borrow_and_update().clone();
        yield initial;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            yield state;
        }
    }
}

pub fn ndjson_response<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = DashboardState> + Send + 'static,
{
    let byte_stream = stream.map(|state| serialize_line(&state));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Helper to create a streaming response from a state receiver
pub fn stream_from_receiver(rx: watch::Receiver<DashboardState>) -> impl IntoResponse {
    match ndjson_response(state_stream(rx)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
