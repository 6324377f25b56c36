// Periodic refresh task with an explicit shutdown point
use crate::application::dashboard_store::DashboardStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct PollerHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop polling. A cycle already in progress finishes and is applied first.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            tracing::error!("Poller task ended abnormally: {}", e);
        }
    }
}

/// Refresh immediately, then every `period` until shut down. A slow cycle
/// delays the next tick instead of stacking cycles.
pub fn spawn_poller(store: Arc<DashboardStore>, period: Duration) -> PollerHandle {
    let (shutdown, mut stop) = oneshot::channel();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!("Polling ThingSpeak every {:?}", period);

        loop {
            tokio::select! {
                biased;
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    store.refresh().await;
                }
            }
        }

        tracing::info!("Poller stopped");
    });

    PollerHandle { shutdown, task }
}
