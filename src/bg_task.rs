use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::services::aggregator;
use crate::AppState;

pub async fn start_background_task(state: Arc<AppState>) {
    tracing::info!(
        "Background Task Started: Server Status Polling every {:?}",
        state.config.poll_interval
    );
    // The first tick completes immediately, which doubles as the initial load
    let mut interval = interval(state.config.poll_interval);

    loop {
        interval.tick().await;
        // Skips are logged inside; an in-flight manual refresh counts as this
        // tick's cycle
        aggregator::refresh_snapshot(&state).await;
    }
}

// Handle that ties the polling loop to the owner's lifetime. stop (or drop)
// aborts the task, cancelling the loop and any cycle still in flight.
pub struct StatusPoller {
    handle: JoinHandle<()>,
}

impl StatusPoller {
    pub fn start(state: Arc<AppState>) -> Self {
        let handle = tokio::spawn(async move {
            start_background_task(state).await;
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
