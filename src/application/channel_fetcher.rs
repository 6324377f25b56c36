// Channel fetcher - concurrent reads of every configured channel
use crate::application::channel_source::ChannelSource;
use crate::domain::channel::{ChannelEndpoint, ChannelResult};
use futures::future::join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChannelFetcher {
    source: Arc<dyn ChannelSource>,
}

impl ChannelFetcher {
    pub fn new(source: Arc<dyn ChannelSource>) -> Self {
        Self { source }
    }

    /// Read all endpoints concurrently. A failing channel becomes a result
    /// with `has_data = false` and never affects its siblings; the output is
    /// in endpoint order regardless of completion order.
    pub async fn fetch_all(&self, endpoints: &[ChannelEndpoint]) -> Vec<ChannelResult> {
        let requests = endpoints.iter().map(|endpoint| async move {
            match self.source.fetch_channel(endpoint).await {
                Ok(feed) => {
                    tracing::debug!(
                        "Channel {} returned {} feed entries",
                        endpoint.channel_id,
                        feed.feeds.len()
                    );
                    ChannelResult::from_feed(endpoint, feed)
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch channel {}: {:#}", endpoint.channel_id, e);
                    ChannelResult::failed(endpoint, format!("{:#}", e))
                }
            }
        });

        join_all(requests).await
    }
}
