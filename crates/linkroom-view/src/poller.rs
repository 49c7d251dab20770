//! Periodic refresh of the active room.

use std::sync::{Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Something refreshed on every poll tick.
#[async_trait]
pub trait PollTarget: Send + Sync + 'static {
    /// Run one refresh.
    async fn poll(&self);
}

/// Owns at most one polling task.
///
/// Arming replaces the previous task. The task holds only a weak reference
/// to its target and stops once the target is dropped. Each tick spawns its
/// refresh, so a slow refresh does not delay the next one. Refreshes still
/// in flight are aborted together with the task.
#[derive(Debug, Default)]
pub struct Poller {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Poller {
    /// Create an idle poller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start polling `target` every `period`, first tick one period from now.
    pub fn arm(&self, period: Duration, target: Weak<dyn PollTarget>) {
        let task = tokio::spawn(run(period, target));
        if let Some(previous) = self.slot().replace(task) {
            previous.abort();
        }
        debug!(period_ms = period.as_millis() as u64, "Poller armed");
    }

    /// Stop polling and abort refreshes still in flight. No-op when idle.
    pub fn cancel(&self) {
        if let Some(task) = self.slot().take() {
            task.abort();
            debug!("Poller cancelled");
        }
    }

    /// Whether a polling task is running.
    pub fn is_armed(&self) -> bool {
        self.slot().as_ref().is_some_and(|task| !task.is_finished())
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(period: Duration, target: Weak<dyn PollTarget>) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Dropped with this future, which aborts every poll still running.
    let mut inflight = JoinSet::new();

    loop {
        ticker.tick().await;
        while inflight.try_join_next().is_some() {}

        let Some(target) = target.upgrade() else {
            debug!("Poll target dropped; stopping");
            break;
        };
        inflight.spawn(async move { target.poll().await });
    }
}
