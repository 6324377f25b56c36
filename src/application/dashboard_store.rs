// Dashboard store - current state, replaced atomically after each cycle
use crate::application::dashboard_service::DashboardService;
use crate::domain::snapshot::DashboardSnapshot;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub snapshot: Option<Arc<DashboardSnapshot>>,
    pub last_update: Option<DateTime<Utc>>,
}

/// Holds the latest [`DashboardState`] and publishes every change to subscribers.
pub struct DashboardStore {
    service: DashboardService,
    state: watch::Sender<DashboardState>,
    refresh_lock: Mutex<()>,
}

impl DashboardStore {
    pub fn new(service: DashboardService) -> Self {
        let (state, _) = watch::channel(DashboardState {
            loading: true,
            ..Default::default()
        });
        Self {
            service,
            state,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn current(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Run one cycle and apply its outcome. Concurrent callers queue, so two
    /// cycles never apply at the same time. On failure the previous snapshot
    /// stays in place next to the error.
    pub async fn refresh(&self) -> DashboardState {
        let _guard = self.refresh_lock.lock().await;

        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let now = Utc::now();
        match self.service.run_cycle(now).await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = None;
                    state.snapshot = Some(snapshot);
                    state.last_update = Some(now);
                });
            }
            Err(e) => {
                tracing::error!("Fetch cycle failed: {}", e);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(e.to_string());
                });
            }
        }

        self.current()
    }
}
