//! # Refresh Scheduler
//!
//! Fixed-interval timer that asks the reconciler to refresh. The first tick
//! fires immediately so the view is populated on startup.
//!
//! The timer runs as a tokio task owned by a [`PollHandle`]. Cancelling the
//! handle (explicitly or by dropping it) stops the task; no tick is delivered
//! afterwards.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::reconciler::SyncEvent;

/// Owner of a running refresh timer
#[derive(Debug)]
pub struct PollHandle {
    task: Option<JoinHandle<()>>,
    interval: Duration,
}

impl PollHandle {
    /// Start ticking on `runtime`, sending `RefreshDue` into `events`
    pub fn spawn(runtime: &Handle, interval: Duration, events: UnboundedSender<SyncEvent>) -> Self {
        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if events.send(SyncEvent::RefreshDue).is_err() {
                    tracing::debug!("Refresh receiver gone, stopping timer");
                    break;
                }
            }
        });

        tracing::debug!("Refresh timer started ({:?})", interval);
        Self {
            task: Some(task),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the timer; later calls do nothing
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Refresh timer cancelled");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
