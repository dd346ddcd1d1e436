// ABOUTME: Live-data synchronization layer for dashboard views
// ABOUTME: Resource polling with stale-data preservation and self-healing socket channels

pub mod channel;
pub mod poller;
pub mod reconnect;
pub mod transport;

pub use channel::{LiveChannel, LiveFeed, MessageHandler};
pub use poller::{fetcher, Fetcher, PollOptions, PollState, Poller, DEFAULT_FETCH_ERROR};
pub use reconnect::{ReconnectConfig, ReconnectState, DEFAULT_RECONNECT_DELAY};
pub use transport::{FrameStream, Transport, WsTransport};
