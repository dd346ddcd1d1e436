// ABOUTME: Generic resource poller - fetches once on creation, then optionally on a fixed timer.
// ABOUTME: Publishes data/loading/error through a watch channel; failures never clear stale data.

use anyhow::Result;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Message stored in `error` when a failure carries no text of its own
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch data";

/// Capability that produces one fresh fetch of `T`
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Wrap an async closure as a [`Fetcher`]
pub fn fetcher<T, F, Fut>(f: F) -> Fetcher<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Snapshot of a poll subscription
#[derive(Debug, Clone, PartialEq)]
pub struct PollState<T> {
    /// Latest successfully fetched value
    pub data: Option<T>,
    pub loading: bool,
    /// Message of the most recent failure, cleared by the next success
    pub error: Option<String>,
}

impl<T> Default for PollState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> PollState<T> {
    /// The fetched data, or the caller's fallback when nothing has arrived yet
    pub fn data_or<'a>(&'a self, fallback: &'a T) -> &'a T {
        self.data.as_ref().unwrap_or(fallback)
    }

    pub fn data_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.data.clone().unwrap_or_default()
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PollOptions {
    /// Re-fetch cadence. `None` or zero means fetch once.
    pub refresh_interval: Option<Duration>,
}

impl PollOptions {
    pub fn every(interval: Duration) -> Self {
        Self {
            refresh_interval: Some(interval),
        }
    }

    fn period(&self) -> Option<Duration> {
        self.refresh_interval.filter(|d| !d.is_zero())
    }
}

struct Shared<T> {
    // Single slot, read only when a fetch starts
    fetcher: Mutex<Fetcher<T>>,
    state: watch::Sender<PollState<T>>,
    torn_down: CancellationToken,
}

impl<T: Send + Sync + 'static> Shared<T> {
    fn current_fetcher(&self) -> Fetcher<T> {
        let slot = self.fetcher.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&slot)
    }

    /// Mark loading and invoke the fetcher now; the returned future settles the result
    fn begin(self: &Arc<Self>) -> impl Future<Output = ()> + Send + 'static {
        self.state.send_modify(|s| s.loading = true);
        let fetch = (self.current_fetcher())();
        let shared = Arc::clone(self);
        async move {
            let result = fetch.await;
            shared.settle(result);
        }
    }

    fn settle(&self, result: Result<T>) {
        if self.torn_down.is_cancelled() {
            tracing::debug!("Discarding fetch result that resolved after teardown");
            return;
        }

        self.state.send_modify(move |s| {
            match result {
                Ok(value) => {
                    s.data = Some(value);
                    s.error = None;
                }
                Err(e) => {
                    let message = e.to_string();
                    tracing::warn!(error = %message, "Poll fetch failed, keeping previous data");
                    s.error = Some(if message.is_empty() {
                        DEFAULT_FETCH_ERROR.to_string()
                    } else {
                        message
                    });
                }
            }
            s.loading = false;
        });
    }
}

/// Poll subscription owned by one view.
///
/// Created with [`Poller::spawn`], which must run inside a tokio runtime. The
/// fetcher is invoked once during construction; with a refresh interval a
/// timer starts a new fetch every period regardless of whether earlier ones
/// have resolved, so the last fetch to resolve wins. Dropping the poller (or
/// calling [`Poller::teardown`]) stops the timer; fetches already in flight
/// run to completion and their results are discarded.
pub struct Poller<T> {
    shared: Arc<Shared<T>>,
    ticker: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + Sync + 'static> Poller<T> {
    pub fn spawn(fetcher: Fetcher<T>, options: PollOptions) -> Self {
        let (state, _) = watch::channel(PollState::default());
        let shared = Arc::new(Shared {
            fetcher: Mutex::new(fetcher),
            state,
            torn_down: CancellationToken::new(),
        });

        tokio::spawn(shared.begin());

        let ticker = options.period().map(|period| {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        _ = shared.torn_down.cancelled() => break,
                        _ = interval.tick() => {
                            tokio::spawn(shared.begin());
                        }
                    }
                }
                tracing::debug!("Poll timer stopped");
            })
        });

        Self { shared, ticker }
    }

    /// Run one fetch cycle and wait for it to settle.
    ///
    /// The cycle runs on its own task, so dropping this future stops the
    /// wait but not the fetch, and `loading` still clears when it resolves.
    pub async fn refresh(&self) {
        if let Err(e) = self.trigger().await {
            tracing::error!(error = %e, "Poll fetch task failed");
        }
    }

    /// Start a fetch cycle without waiting for it
    pub fn trigger(&self) -> JoinHandle<()> {
        tokio::spawn(self.shared.begin())
    }

    /// Replace the fetcher used by every later cycle, manual or timed
    pub fn set_fetcher(&self, fetcher: Fetcher<T>) {
        let mut slot = self.shared.fetcher.lock().unwrap_or_else(|e| e.into_inner());
        *slot = fetcher;
    }

    pub fn state(&self) -> PollState<T> {
        self.shared.state.borrow().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.shared.state.borrow().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.shared.state.borrow().error.clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<PollState<T>> {
        self.shared.state.subscribe()
    }

    /// Stop the timer and discard results still in flight; same as dropping the poller
    pub fn teardown(self) {
        drop(self);
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.shared.torn_down.cancel();
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading_without_data() {
        let state: PollState<u32> = PollState::default();
        assert!(state.loading);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_data_or_prefers_fetched_value() {
        let fallback = 7;
        let mut state: PollState<u32> = PollState::default();
        assert_eq!(*state.data_or(&fallback), 7);

        state.data = Some(3);
        assert_eq!(*state.data_or(&fallback), 3);
        assert_eq!(state.data_or_default(), 3);
    }

    #[test]
    fn test_zero_interval_means_no_timer() {
        assert_eq!(PollOptions::every(Duration::ZERO).period(), None);
        assert_eq!(PollOptions::default().period(), None);
        assert_eq!(
            PollOptions::every(Duration::from_secs(1)).period(),
            Some(Duration::from_secs(1))
        );
    }
}
