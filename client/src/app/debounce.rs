//! # Quote Debouncer
//!
//! Timer bookkeeping for quote requests: at most one scheduled fetch and one
//! recurring refresh are alive at a time, and both are aborted on change or drop.
//!
//! The debouncer only decides *when*; what a fetch does is supplied by the
//! orchestrator as a future.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Debounce and refresh timers for one orchestrator.
pub struct QuoteDebouncer {
    min_interval: Duration,
    refresh_interval: Duration,
    /// Latest request issued or quote received
    last_fetch: Option<Instant>,
    pending: Option<JoinHandle<()>>,
    refresh: Option<JoinHandle<()>>,
}

impl QuoteDebouncer {
    pub fn new(min_interval: Duration, refresh_interval: Duration) -> Self {
        Self {
            min_interval,
            refresh_interval,
            last_fetch: None,
            pending: None,
            refresh: None,
        }
    }

    /// How long a fetch requested at `now` has to wait.
    ///
    /// Counts from the later of the last issued request and the last success,
    /// so edits made while a fetch is in flight wait for the trailing timer.
    pub fn delay_at(&self, now: Instant) -> Duration {
        match self.last_fetch {
            Some(at) => self
                .min_interval
                .saturating_sub(now.saturating_duration_since(at)),
            None => Duration::ZERO,
        }
    }

    /// A fetch was sent at `at`.
    pub fn record_request(&mut self, at: Instant) {
        self.touch(at);
    }

    pub fn record_success(&mut self, at: Instant) {
        self.touch(at);
    }

    fn touch(&mut self, at: Instant) {
        self.last_fetch = Some(self.last_fetch.map_or(at, |last| last.max(at)));
    }

    /// Run `fetch` after `delay`, replacing any scheduled fetch.
    ///
    /// Only the wait is cancellable: once the timer fires the fetch runs
    /// detached, and stale results are dropped by the caller's epoch check.
    pub fn schedule<F>(&mut self, delay: Duration, fetch: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel_pending();
        if delay.is_zero() {
            tokio::spawn(fetch);
            return;
        }
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(fetch);
        }));
    }

    /// Start the recurring refresh, replacing any running one.
    ///
    /// `tick` runs once per period; returning `false` ends the loop.
    pub fn start_refresh<F, Fut>(&mut self, mut tick: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.cancel_refresh();
        let period = self.refresh_interval;
        self.refresh = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !tick().await {
                    break;
                }
            }
        }));
    }

    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn cancel_refresh(&mut self) {
        if let Some(handle) = self.refresh.take() {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        self.cancel_pending();
        self.cancel_refresh();
    }

    /// A fetch is waiting on its timer.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for QuoteDebouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
