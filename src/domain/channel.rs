// Channel domain model
use super::sensor::SensorField;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEndpoint {
    pub channel_id: String,
    pub api_key: String,
}

impl ChannelEndpoint {
    pub fn new(channel_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelInfo {
    pub name: Option<String>,
}

/// The eight numeric readings of one feed entry; `None` when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SensorReadings {
    pub field1: Option<f64>,
    pub field2: Option<f64>,
    pub field3: Option<f64>,
    pub field4: Option<f64>,
    pub field5: Option<f64>,
    pub field6: Option<f64>,
    pub field7: Option<f64>,
    pub field8: Option<f64>,
}

impl SensorReadings {
    pub fn get(&self, field: SensorField) -> Option<f64> {
        match field {
            SensorField::Field1 => self.field1,
            SensorField::Field2 => self.field2,
            SensorField::Field3 => self.field3,
            SensorField::Field4 => self.field4,
            SensorField::Field5 => self.field5,
            SensorField::Field6 => self.field6,
            SensorField::Field7 => self.field7,
            SensorField::Field8 => self.field8,
        }
    }

    pub fn set(&mut self, field: SensorField, value: Option<f64>) {
        let slot = match field {
            SensorField::Field1 => &mut self.field1,
            SensorField::Field2 => &mut self.field2,
            SensorField::Field3 => &mut self.field3,
            SensorField::Field4 => &mut self.field4,
            SensorField::Field5 => &mut self.field5,
            SensorField::Field6 => &mut self.field6,
            SensorField::Field7 => &mut self.field7,
            SensorField::Field8 => &mut self.field8,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawFeed {
    pub entry_id: String,
    pub created_at: DateTime<Utc>,
    pub readings: SensorReadings,
}

/// A decoded channel response: channel metadata plus its feed entries, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelFeed {
    pub channel: ChannelInfo,
    pub feeds: Vec<RawFeed>,
}

/// Outcome of reading one endpoint during a fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelResult {
    pub channel_id: String,
    pub api_key: String,
    pub channel_info: ChannelInfo,
    pub latest_feed: Option<RawFeed>,
    pub feeds: Vec<RawFeed>,
    pub has_data: bool,
    pub error: Option<String>,
}

impl ChannelResult {
    pub fn from_feed(endpoint: &ChannelEndpoint, feed: ChannelFeed) -> Self {
        let latest_feed = feed.feeds.last().cloned();
        Self {
            channel_id: endpoint.channel_id.clone(),
            api_key: endpoint.api_key.clone(),
            channel_info: feed.channel,
            has_data: latest_feed.is_some(),
            latest_feed,
            feeds: feed.feeds,
            error: None,
        }
    }

    pub fn failed(endpoint: &ChannelEndpoint, error: String) -> Self {
        Self {
            channel_id: endpoint.channel_id.clone(),
            api_key: endpoint.api_key.clone(),
            channel_info: ChannelInfo::default(),
            latest_feed: None,
            feeds: Vec::new(),
            has_data: false,
            error: Some(error),
        }
    }

    pub fn display_name(&self) -> String {
        self.channel_info
            .name
            .clone()
            .unwrap_or_else(|| format!("Channel {}", self.channel_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(entry_id: &str, co: f64) -> RawFeed {
        let mut readings = SensorReadings::default();
        readings.set(SensorField::Field4, Some(co));
        RawFeed {
            entry_id: entry_id.to_string(),
            created_at: DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            readings,
        }
    }

    #[test]
    fn test_latest_feed_is_last_entry() {
        let endpoint = ChannelEndpoint::new("1", "key");
        let result = ChannelResult::from_feed(
            &endpoint,
            ChannelFeed {
                channel: ChannelInfo::default(),
                feeds: vec![feed("1", 10.0), feed("2", 20.0)],
            },
        );
        assert!(result.has_data);
        assert_eq!(result.latest_feed.unwrap().entry_id, "2");
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_empty_feed_has_no_data_without_error() {
        let endpoint = ChannelEndpoint::new("7", "key");
        let result = ChannelResult::from_feed(&endpoint, ChannelFeed::default());
        assert!(!result.has_data);
        assert!(result.latest_feed.is_none());
        assert_eq!(result.error, None);
        assert_eq!(result.display_name(), "Channel 7");
    }

    #[test]
    fn test_failed_result() {
        let endpoint = ChannelEndpoint::new("7", "key");
        let result = ChannelResult::failed(&endpoint, "HTTP status 500".to_string());
        assert!(!result.has_data);
        assert_eq!(result.error.as_deref(), Some("HTTP status 500"));
    }
}
