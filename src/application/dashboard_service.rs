// Dashboard service - one fetch cycle from endpoints to snapshot
use crate::application::alerts::derive_alerts;
use crate::application::channel_fetcher::ChannelFetcher;
use crate::application::normalizer::{normalize_feeds, summarize};
use crate::application::stats::compute_stats;
use crate::domain::channel::{ChannelEndpoint, ChannelResult};
use crate::domain::snapshot::DashboardSnapshot;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Failures that abort a whole cycle. Per-channel failures never do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("no ThingSpeak channels are configured")]
    NoEndpoints,
}

#[derive(Clone)]
pub struct DashboardService {
    fetcher: ChannelFetcher,
    endpoints: Arc<[ChannelEndpoint]>,
}

impl DashboardService {
    pub fn new(fetcher: ChannelFetcher, endpoints: Vec<ChannelEndpoint>) -> Self {
        Self {
            fetcher,
            endpoints: endpoints.into(),
        }
    }

    pub async fn run_cycle(&self, now: DateTime<Utc>) -> Result<DashboardSnapshot, DashboardError> {
        if self.endpoints.is_empty() {
            return Err(DashboardError::NoEndpoints);
        }

        let results = self.fetcher.fetch_all(&self.endpoints).await;
        let snapshot = build_snapshot(results, now);
        tracing::info!(
            "Fetch cycle complete: {}/{} channels with data, {} stats, {} alerts",
            snapshot.summary.channels_with_data,
            snapshot.summary.total_channels,
            snapshot.stats.len(),
            snapshot.alerts.len()
        );
        Ok(snapshot)
    }
}

/// Aggregate channel results into a snapshot. Deterministic for a given `now`.
pub fn build_snapshot(results: Vec<ChannelResult>, now: DateTime<Utc>) -> DashboardSnapshot {
    let slots = normalize_feeds(&results, now);
    let stats = compute_stats(&slots);
    let alerts = derive_alerts(&slots);
    let summary = summarize(&results);

    DashboardSnapshot {
        slots,
        stats,
        alerts,
        summary,
        channels: results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::channel_fetcher::tests::{endpoints, timestamp, FakeSource};
    use crate::domain::sensor::SensorField;
    use crate::domain::snapshot::AlertLevel;

    fn service(source: FakeSource, ids: &[&str]) -> DashboardService {
        DashboardService::new(ChannelFetcher::new(Arc::new(source)), endpoints(ids))
    }

    #[tokio::test]
    async fn test_partial_failure_still_builds_snapshot() {
        let source = FakeSource::with(&[("a", Some(120.0)), ("c", Some(250.0))]);
        let service = service(source, &["a", "b", "c"]);

        let snapshot = service.run_cycle(timestamp()).await.unwrap();

        assert_eq!(snapshot.slots.len(), 3);
        assert_eq!(snapshot.summary.channels_with_data, 2);
        assert_eq!(snapshot.summary.channels_without_data, 1);
        assert!(!snapshot.slots[1].has_data);

        let co = snapshot
            .stats
            .iter()
            .find(|s| s.field == SensorField::Field4)
            .unwrap();
        assert_eq!(co.value, "250.00");
        assert!((co.trend - 108.333_333).abs() < 1e-3);

        let levels: Vec<AlertLevel> = snapshot.alerts.iter().map(|a| a.level).collect();
        assert_eq!(levels, vec![AlertLevel::Caution, AlertLevel::Warning]);
    }

    #[tokio::test]
    async fn test_no_endpoints_is_fatal() {
        let service = service(FakeSource::default(), &[]);
        assert_eq!(
            service.run_cycle(timestamp()).await,
            Err(DashboardError::NoEndpoints)
        );
    }

    #[tokio::test]
    async fn test_all_channels_failing_is_not_fatal() {
        let service = service(FakeSource::default(), &["a", "b"]);

        let snapshot = service.run_cycle(timestamp()).await.unwrap();

        assert_eq!(snapshot.slots.len(), 2);
        assert_eq!(snapshot.summary.channels_with_data, 0);
        assert!(snapshot.stats.is_empty());
        assert!(snapshot.alerts.is_empty());
    }

    #[tokio::test]
    async fn test_rebuilding_is_idempotent() {
        let source = FakeSource::with(&[("a", Some(120.0)), ("b", None), ("c", Some(310.0))]);
        let service = service(source, &["a", "b", "c", "d"]);

        let first = service.run_cycle(timestamp()).await.unwrap();
        let second = build_snapshot(first.channels.clone(), timestamp());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.slots).unwrap(),
            serde_json::to_string(&second.slots).unwrap()
        );
    }
}
