// Mapper to convert dashboard state to its JSON wire shape
use crate::application::dashboard_store::DashboardState;
use crate::domain::channel::ChannelResult;
use crate::domain::snapshot::{Alert, ChannelSummary, NormalizedFeedSlot, SensorStat};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDto<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub last_update: Option<DateTime<Utc>>,
    pub slots: &'a [NormalizedFeedSlot],
    pub stats: &'a [SensorStat],
    pub alerts: &'a [Alert],
    pub summary: ChannelSummary,
}

/// Channel selector entry; API keys stay server-side.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDto {
    pub channel_id: String,
    pub name: String,
    pub has_data: bool,
    pub feed_count: usize,
    pub error: Option<String>,
}

pub fn state_to_dto(state: &DashboardState) -> StateDto<'_> {
    let snapshot = state.snapshot.as_deref();
    StateDto {
        loading: state.loading,
        error: state.error.as_deref(),
        last_update: state.last_update,
        slots: snapshot.map(|s| s.slots.as_slice()).unwrap_or_default(),
        stats: snapshot.map(|s| s.stats.as_slice()).unwrap_or_default(),
        alerts: snapshot.map(|s| s.alerts.as_slice()).unwrap_or_default(),
        summary: snapshot.map(|s| s.summary).unwrap_or_default(),
    }
}

pub fn channel_to_dto(result: &ChannelResult) -> ChannelDto {
    ChannelDto {
        channel_id: result.channel_id.clone(),
        name: result.display_name(),
        has_data: result.has_data,
        feed_count: result.feeds.len(),
        error: result.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::build_snapshot;
    use crate::domain::channel::ChannelEndpoint;
    use std::sync::Arc;

    #[test]
    fn test_empty_state_serializes_without_snapshot() {
        let state = DashboardState {
            loading: true,
            ..Default::default()
        };
        let json = serde_json::to_value(state_to_dto(&state)).unwrap();
        assert_eq!(json["loading"], true);
        assert_eq!(json["slots"], serde_json::json!([]));
        assert_eq!(json["summary"]["totalChannels"], 0);
    }

    #[test]
    fn test_placeholder_slot_wire_shape() {
        let endpoint = ChannelEndpoint::new("5", "secret");
        let results = vec![ChannelResult::failed(&endpoint, "timeout".to_string())];
        let now = Utc::now();
        let state = DashboardState {
            snapshot: Some(Arc::new(build_snapshot(results, now))),
            last_update: Some(now),
            ..Default::default()
        };

        let json = serde_json::to_value(state_to_dto(&state)).unwrap();
        let slot = &json["slots"][0];
        assert_eq!(slot["entryId"], "no-data-5");
        assert_eq!(slot["field1"], serde_json::Value::Null);
        assert_eq!(slot["hasData"], false);
        assert_eq!(slot["error"], "timeout");
        assert_eq!(json["summary"]["channelsWithoutData"], 1);
        assert!(!json.to_string().contains("secret"));
    }

    #[test]
    fn test_channel_dto_hides_api_key() {
        let endpoint = ChannelEndpoint::new("5", "secret");
        let dto = channel_to_dto(&ChannelResult::failed(&endpoint, "timeout".to_string()));
        assert_eq!(dto.name, "Channel 5");
        assert_eq!(dto.feed_count, 0);
        assert!(!serde_json::to_string(&dto).unwrap().contains("secret"));
    }
}
