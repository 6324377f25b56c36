// ThingSpeak REST client
use crate::application::channel_source::ChannelSource;
use crate::domain::channel::{ChannelEndpoint, ChannelFeed, ChannelInfo, RawFeed, SensorReadings};
use crate::domain::sensor::SensorField;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on how much of a failed response body reaches the debug log.
const ERROR_BODY_PREVIEW: usize = 512;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error status {status}")]
    Status { status: u16 },
    #[error("invalid created_at {value:?} in entry {entry_id}")]
    Timestamp { entry_id: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ThingSpeakClient {
    client: reqwest::Client,
    base_url: String,
    results: u32,
}

#[derive(Debug, Deserialize)]
struct FeedsResponse {
    #[serde(default)]
    channel: Option<ChannelPayload>,
    #[serde(default)]
    feeds: Option<Vec<FeedPayload>>,
}

#[derive(Debug, Deserialize)]
struct ChannelPayload {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeedPayload {
    entry_id: serde_json::Value,
    created_at: String,
    #[serde(default)]
    field1: Option<serde_json::Value>,
    #[serde(default)]
    field2: Option<serde_json::Value>,
    #[serde(default)]
    field3: Option<serde_json::Value>,
    #[serde(default)]
    field4: Option<serde_json::Value>,
    #[serde(default)]
    field5: Option<serde_json::Value>,
    #[serde(default)]
    field6: Option<serde_json::Value>,
    #[serde(default)]
    field7: Option<serde_json::Value>,
    #[serde(default)]
    field8: Option<serde_json::Value>,
}

impl FeedPayload {
    fn raw(&self, field: SensorField) -> Option<&serde_json::Value> {
        match field {
            SensorField::Field1 => self.field1.as_ref(),
            SensorField::Field2 => self.field2.as_ref(),
            SensorField::Field3 => self.field3.as_ref(),
            SensorField::Field4 => self.field4.as_ref(),
            SensorField::Field5 => self.field5.as_ref(),
            SensorField::Field6 => self.field6.as_ref(),
            SensorField::Field7 => self.field7.as_ref(),
            SensorField::Field8 => self.field8.as_ref(),
        }
    }
}

impl ThingSpeakClient {
    pub fn new(base_url: String, request_timeout: Duration, results: u32) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            results,
        })
    }

    fn build_feed_url(&self, endpoint: &ChannelEndpoint) -> String {
        format!(
            "{}/channels/{}/feeds.json?api_key={}&results={}",
            self.base_url,
            urlencoding::encode(&endpoint.channel_id),
            urlencoding::encode(&endpoint.api_key),
            self.results
        )
    }
}

#[async_trait]
impl ChannelSource for ThingSpeakClient {
    async fn fetch_channel(&self, endpoint: &ChannelEndpoint) -> Result<ChannelFeed> {
        let url = self.build_feed_url(endpoint);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to ThingSpeak")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                "Channel {} returned status {}: {}",
                endpoint.channel_id,
                status,
                body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            );
            return Err(FetchError::Status { status }.into());
        }

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read ThingSpeak response")?;

        decode_feed(&body)
    }
}

/// Decode a `feeds.json` body into a channel feed.
fn decode_feed(body: &str) -> Result<ChannelFeed> {
    let response: FeedsResponse =
        serde_json::from_str(body).context("Failed to parse ThingSpeak response")?;

    let feeds = response
        .feeds
        .unwrap_or_default()
        .into_iter()
        .map(decode_entry)
        .collect::<Result<Vec<_>>>()?;

    Ok(ChannelFeed {
        channel: ChannelInfo {
            name: response.channel.and_then(|c| c.name),
        },
        feeds,
    })
}

fn decode_entry(payload: FeedPayload) -> Result<RawFeed> {
    let entry_id = match &payload.entry_id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let created_at = DateTime::parse_from_rfc3339(&payload.created_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| FetchError::Timestamp {
            entry_id: entry_id.clone(),
            value: payload.created_at.clone(),
        })?;

    let mut readings = SensorReadings::default();
    for field in SensorField::ALL {
        readings.set(field, payload.raw(field).and_then(parse_reading));
    }

    Ok(RawFeed {
        entry_id,
        created_at,
        readings,
    })
}

/// ThingSpeak sends readings as strings; anything that is not a finite number is absent.
fn parse_reading(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
