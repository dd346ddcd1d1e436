// ABOUTME: Self-healing live socket channel that forwards parsed JSON push events.
// ABOUTME: Owns its reconnect timer so closing it cancels every pending and future attempt.

use futures::StreamExt;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::reconnect::{ReconnectConfig, ReconnectState};
use crate::transport::{FrameStream, Transport};

/// Callback receiving every successfully parsed frame
pub type MessageHandler = Arc<dyn Fn(Value) + Send + Sync>;

/// A persistent connection to a server push endpoint.
///
/// Opens on construction. Each text frame is parsed as JSON and handed to the
/// message callback; frames that fail to parse are logged and dropped. When
/// the connection closes, for whatever reason, a fresh one to the same URL is
/// opened after the reconnect delay, indefinitely.
/// Transport errors on an open connection are only logged.
pub struct LiveChannel {
    url: String,
    connected: watch::Receiver<bool>,
    attempts: Arc<AtomicU64>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl LiveChannel {
    pub fn open<F>(
        url: impl Into<String>,
        transport: Arc<dyn Transport>,
        on_message: F,
        reconnect: ReconnectConfig,
    ) -> Self
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        let url = url.into();
        let (connected_tx, connected) = watch::channel(false);
        let attempts = Arc::new(AtomicU64::new(0));
        let cancel = CancellationToken::new();

        let worker = Worker {
            url: url.clone(),
            transport,
            on_message: Arc::new(on_message),
            connected: connected_tx,
            attempts: Arc::clone(&attempts),
            cancel: cancel.clone(),
        };
        let task = tokio::spawn(worker.run(ReconnectState::new(reconnect)));

        Self {
            url,
            connected,
            attempts,
            cancel,
            task: Some(task),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn connected(&self) -> bool {
        *self.connected.borrow()
    }

    /// Receiver notified whenever connectivity flips
    pub fn subscribe_connected(&self) -> watch::Receiver<bool> {
        self.connected.clone()
    }

    /// Connection attempts made so far, including the first
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Close the socket and cancel any scheduled reconnect.
    ///
    /// No connection attempt starts after this returns.
    pub async fn close(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::error!(url = %self.url, error = %e, "Live channel task panicked");
                }
            }
        }
        tracing::info!(url = %self.url, "Live channel closed by owner");
    }
}

impl Drop for LiveChannel {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct Worker {
    url: String,
    transport: Arc<dyn Transport>,
    on_message: MessageHandler,
    connected: watch::Sender<bool>,
    attempts: Arc<AtomicU64>,
    cancel: CancellationToken,
}

impl Worker {
    async fn run(self, mut backoff: ReconnectState) {
        loop {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::info!(
                url = %self.url,
                transport = self.transport.name(),
                attempt,
                "Opening live channel"
            );

            let opened = tokio::select! {
                _ = self.cancel.cancelled() => break,
                opened = self.transport.connect(&self.url) => opened,
            };

            match opened {
                Ok(frames) => {
                    backoff.record_success();
                    self.connected.send_replace(true);
                    tracing::info!(url = %self.url, "Live channel open");

                    let cancelled = tokio::select! {
                        _ = self.cancel.cancelled() => true,
                        _ = self.pump(frames) => false,
                    };
                    self.connected.send_replace(false);
                    if cancelled {
                        break;
                    }
                    tracing::warn!(url = %self.url, "Live channel closed");
                }
                Err(e) => {
                    tracing::warn!(url = %self.url, error = %e, "Live channel connection failed");
                }
            }

            let delay = backoff.record_failure();
            tracing::info!(
                url = %self.url,
                failures = backoff.consecutive_failures(),
                delay_ms = delay.as_millis() as u64,
                "Reconnecting after delay"
            );

            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    /// Deliver frames until the connection closes
    async fn pump(&self, mut frames: FrameStream) {
        while let Some(frame) = frames.next().await {
            match frame {
                Ok(text) => match serde_json::from_str::<Value>(&text) {
                    Ok(payload) => (self.on_message)(payload),
                    Err(e) => {
                        tracing::error!(url = %self.url, error = %e, "Failed to parse live channel frame");
                    }
                },
                Err(e) => {
                    tracing::error!(url = %self.url, error = %e, "Live channel transport error");
                }
            }
        }
    }
}

/// Subscription-style wrapper around a [`LiveChannel`] that keeps the most
/// recent message and the connectivity flag observable.
pub struct LiveFeed {
    channel: LiveChannel,
    last_message: watch::Receiver<Option<Value>>,
}

impl LiveFeed {
    pub fn connect(
        url: impl Into<String>,
        transport: Arc<dyn Transport>,
        reconnect: ReconnectConfig,
    ) -> Self {
        let (message_tx, last_message) = watch::channel(None);
        let channel = LiveChannel::open(
            url,
            transport,
            move |payload| {
                message_tx.send_replace(Some(payload));
            },
            reconnect,
        );

        Self {
            channel,
            last_message,
        }
    }

    pub fn last_message(&self) -> Option<Value> {
        self.last_message.borrow().clone()
    }

    pub fn connected(&self) -> bool {
        self.channel.connected()
    }

    pub fn subscribe_messages(&self) -> watch::Receiver<Option<Value>> {
        self.last_message.clone()
    }

    pub fn subscribe_connected(&self) -> watch::Receiver<bool> {
        self.channel.subscribe_connected()
    }

    pub fn channel(&self) -> &LiveChannel {
        &self.channel
    }

    pub async fn close(self) {
        self.channel.close().await
    }
}
