//! Periodic refresh of the wall clock behind the current-time line.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDateTime, TimeZone, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Source of the local wall-clock time.
pub trait WallClock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// System time observed in a fixed timezone.
#[derive(Debug, Clone)]
pub struct ZonedClock<Z: TimeZone> {
    zone: Z,
}

impl<Z: TimeZone> ZonedClock<Z> {
    #[must_use]
    pub const fn new(zone: Z) -> Self {
        Self { zone }
    }
}

impl<Z> WallClock for ZonedClock<Z>
where
    Z: TimeZone + Send + Sync + 'static,
{
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.zone).naive_local()
    }
}

/// Background task publishing the wall clock every `period`.
///
/// The task ends when [`NowTicker::stop`] is called, when the ticker is
/// dropped, or when the parent cancellation token fires.
#[derive(Debug)]
pub struct NowTicker {
    receiver: watch::Receiver<NaiveDateTime>,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl NowTicker {
    /// ## Summary
    /// Spawns a ticker on the current tokio runtime.
    ///
    /// ## Panics
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(clock: Arc<dyn WallClock>, period: Duration) -> Self {
        Self::spawn_with_token(clock, period, &CancellationToken::new())
    }

    /// ## Summary
    /// Spawns a ticker that also stops when `parent` is cancelled.
    ///
    /// ## Panics
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn_with_token(
        clock: Arc<dyn WallClock>,
        period: Duration,
        parent: &CancellationToken,
    ) -> Self {
        let period = period.max(Duration::from_millis(1));
        let token = parent.child_token();
        let (sender, receiver) = watch::channel(clock.now());

        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial value is already published.
            interval.tick().await;

            loop {
                tokio::select! {
                    () = task_token.cancelled() => {
                        tracing::debug!("Now ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let now = clock.now();
                        tracing::trace!(%now, "Now ticker refreshed");
                        if sender.send(now).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis(), "Now ticker started");

        Self {
            receiver,
            token,
            handle: Some(handle),
        }
    }

    /// Most recently published time.
    #[must_use]
    pub fn latest(&self) -> NaiveDateTime {
        *self.receiver.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NaiveDateTime> {
        self.receiver.clone()
    }

    /// Signals the task to stop; it exits at its next poll.
    pub fn stop(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stops the task and waits for it to finish.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(error) = handle.await {
                tracing::warn!(%error, "Now ticker task failed");
            }
        }
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
