// Snapshot domain model - everything derived in one fetch cycle
use super::channel::{ChannelResult, SensorReadings};
use super::sensor::SensorField;
use super::threshold::{SensorStatus, ThresholdCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One channel's contribution to a snapshot, real or placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFeedSlot {
    pub entry_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub readings: SensorReadings,
    pub channel_id: String,
    pub channel_name: String,
    pub has_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NormalizedFeedSlot {
    pub fn value(&self, field: SensorField) -> Option<f64> {
        self.readings.get(field)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub total_channels: usize,
    pub channels_with_data: usize,
    pub channels_without_data: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorStat {
    pub field: SensorField,
    pub title: String,
    pub value: String,
    pub unit: String,
    pub trend: f64,
    pub status: SensorStatus,
    pub status_color: &'static str,
    pub icon: String,
    pub threshold_category: ThresholdCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Caution,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub sensor: String,
    pub message: String,
    pub level: AlertLevel,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub slots: Vec<NormalizedFeedSlot>,
    pub stats: Vec<SensorStat>,
    pub alerts: Vec<Alert>,
    pub summary: ChannelSummary,
    pub channels: Vec<ChannelResult>,
}
