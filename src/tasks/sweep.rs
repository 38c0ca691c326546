//! TTL Sweep Task
//!
//! Background task that periodically evicts expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Lower bound on the sweep period; `tokio::time::interval` rejects zero.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

// == Sweep Handle ==
/// Owner of a running sweep task.
///
/// Call [`SweepHandle::shutdown`] to stop the task and wait for it. Dropping
/// the handle aborts the task, so the sweep never outlives its owner.
#[derive(Debug)]
pub struct SweepHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl SweepHandle {
    /// Signals the task to stop and waits until it has exited.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!("Sweep task ended abnormally: {}", err);
            }
        }
    }

    /// Returns true once the task is no longer running.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawns a background task that sweeps `cache` once per TTL interval.
///
/// The first sweep runs one interval after spawning. Each sweep takes the
/// store's write lock once and removes every entry older than the TTL.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(CacheStore::new(Duration::from_secs(30)));
/// let sweeper = spawn_sweep_task(cache.clone());
/// // Later:
/// sweeper.shutdown().await;
/// ```
pub fn spawn_sweep_task(cache: Arc<CacheStore>) -> SweepHandle {
    let period = cache.ttl().max(MIN_SWEEP_PERIOD);
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", period);

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    let removed = cache.sweep_expired();

                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                    debug!(stats = ?cache.stats(), "TTL sweep complete");
                }
            }
        }

        debug!("TTL sweep task stopped");
    });

    SweepHandle {
        stop: Some(stop_tx),
        task: Some(task),
    }
}
