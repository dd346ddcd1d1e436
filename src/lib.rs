// ABOUTME: Root library module for the sitepulse construction telemetry client
// ABOUTME: REST client, payload types, config, feeds and approvals on top of sitepulse-core

pub mod api;
pub mod approvals;
pub mod config;
pub mod feeds;
pub mod paths;
pub mod types;

// Re-export the synchronization layer
pub use sitepulse_core::{
    fetcher, Fetcher, LiveChannel, LiveFeed, PollOptions, PollState, Poller, ReconnectConfig,
    Transport, WsTransport,
};

pub use api::ApiClient;
pub use approvals::ApprovalDesk;
pub use config::Config;
pub use feeds::Feed;
