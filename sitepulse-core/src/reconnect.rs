// ABOUTME: Reconnect policy for live socket channels: one fixed delay, retried forever.
// ABOUTME: Failures are counted for logging only; they never change the delay.

use std::time::Duration;

/// Delay between a channel closing and the next connection attempt
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectConfig {
    pub delay: Duration,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self::fixed(DEFAULT_RECONNECT_DELAY)
    }
}

impl ReconnectConfig {
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }
}

/// Per-channel reconnect bookkeeping
#[derive(Debug)]
pub struct ReconnectState {
    delay: Duration,
    consecutive_failures: u32,
}

impl ReconnectState {
    pub fn new(config: ReconnectConfig) -> Self {
        Self {
            delay: config.delay,
            consecutive_failures: 0,
        }
    }

    /// A connection opened
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// A connection closed or failed to open; returns how long to wait
    pub fn record_failure(&mut self) -> Duration {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.delay
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
