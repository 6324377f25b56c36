// Feed normalizer - one slot per channel, placeholders for missing data
use crate::domain::channel::{ChannelResult, SensorReadings};
use crate::domain::snapshot::{ChannelSummary, NormalizedFeedSlot};
use chrono::{DateTime, Utc};

/// Map every channel result to exactly one slot, in the same order.
///
/// Channels without a latest feed get a placeholder stamped with `now`,
/// every reading `None` and the fetch error carried forward.
pub fn normalize_feeds(results: &[ChannelResult], now: DateTime<Utc>) -> Vec<NormalizedFeedSlot> {
    results
        .iter()
        .map(|result| match &result.latest_feed {
            Some(feed) => NormalizedFeedSlot {
                entry_id: feed.entry_id.clone(),
                created_at: feed.created_at,
                readings: feed.readings,
                channel_id: result.channel_id.clone(),
                channel_name: result.display_name(),
                has_data: true,
                error: None,
            },
            None => NormalizedFeedSlot {
                entry_id: format!("no-data-{}", result.channel_id),
                created_at: now,
                readings: SensorReadings::default(),
                channel_id: result.channel_id.clone(),
                channel_name: result.display_name(),
                has_data: false,
                error: result.error.clone(),
            },
        })
        .collect()
}

pub fn summarize(results: &[ChannelResult]) -> ChannelSummary {
    let channels_with_data = results.iter().filter(|r| r.has_data).count();
    ChannelSummary {
        total_channels: results.len(),
        channels_with_data,
        channels_without_data: results.len() - channels_with_data,
    }
}
