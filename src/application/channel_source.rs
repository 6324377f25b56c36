// Source trait for per-channel feed access
use crate::domain::channel::{ChannelEndpoint, ChannelFeed};
use async_trait::async_trait;

#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Fetch the most recent feed entries of one channel
    async fn fetch_channel(&self, endpoint: &ChannelEndpoint) -> anyhow::Result<ChannelFeed>;
}
