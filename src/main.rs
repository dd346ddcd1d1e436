// ABOUTME: sitepulse CLI - watch dashboard feeds, tail the live channel, act on approvals
// ABOUTME: Initializes logging and config, then runs one subcommand until done or Ctrl-C

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use sitepulse::types::ApprovalRequest;
use sitepulse::{
    ApiClient, ApprovalDesk, Config, Feed, LiveFeed, PollOptions, PollState, Poller, WsTransport,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sitepulse",
    version,
    about = "Construction project telemetry in your terminal"
)]
struct Cli {
    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Poll one or more feeds and print every change
    Watch {
        #[arg(value_enum, required = true)]
        feeds: Vec<Feed>,
        /// Refresh cadence in milliseconds (0 = fetch once) [default: from config]
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Also open the live channel and refresh every feed on each push event
        #[arg(long)]
        live: bool,
        /// Print whole payloads instead of a one-line summary
        #[arg(long)]
        full: bool,
    },
    /// Print push events and connectivity changes from the live channel
    Live,
    /// List watchable feeds
    Feeds,
    /// Show the approval queue (pending only unless --all)
    Approvals {
        #[arg(long)]
        all: bool,
    },
    /// Approve a pending request
    Approve {
        id: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Reject a pending request
    Reject {
        id: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Trigger an agent run
    RunAgent { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_logging(cli.json_logs);

    let config = Config::load()?;
    tracing::debug!(
        api = %config.api.base_url,
        ws = %config.live.ws_url,
        refresh_ms = config.poll.refresh_interval_ms,
        "Configuration loaded"
    );

    let client = ApiClient::new(&config.api.base_url);

    match cli.command {
        Command::Watch {
            feeds,
            interval_ms,
            live,
            full,
        } => {
            let refresh_interval = match interval_ms {
                Some(0) => None,
                Some(ms) => Some(Duration::from_millis(ms)),
                None => config.refresh_interval(),
            };
            watch_feeds(&config, &client, feeds, refresh_interval, live, full).await
        }
        Command::Live => tail_live(&config).await,
        Command::Feeds => {
            for feed in Feed::all() {
                println!("{:<20} {}", feed.name(), feed.area());
            }
            Ok(())
        }
        Command::Approvals { all } => show_approvals(client, all).await,
        Command::Approve { id, notes } => decide(client, &id, &notes, true).await,
        Command::Reject { id, notes } => decide(client, &id, &notes, false).await,
        Command::RunAgent { name } => {
            client.trigger_agent(&name).await?;
            println!("{} triggered {}", stamp(), name);
            Ok(())
        }
    }
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,sitepulse=info,sitepulse_core=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn watch_feeds(
    config: &Config,
    client: &ApiClient,
    feeds: Vec<Feed>,
    refresh_interval: Option<Duration>,
    live: bool,
    full: bool,
) -> Result<()> {
    let pollers: Vec<(Feed, Poller<Value>)> = Feed::unique(feeds)
        .into_iter()
        .map(|feed| {
            let poller = Poller::spawn(feed.fetcher(client), PollOptions { refresh_interval });
            (feed, poller)
        })
        .collect();

    for (feed, poller) in &pollers {
        let feed = *feed;
        let mut rx = poller.subscribe();
        tokio::spawn(async move {
            loop {
                let state = rx.borrow_and_update().clone();
                render(feed, &state, full);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    let live_feed = live.then(|| {
        LiveFeed::connect(
            config.live.ws_url.clone(),
            Arc::new(WsTransport),
            config.reconnect(),
        )
    });
    let mut pushes = live_feed.as_ref().map(LiveFeed::subscribe_messages);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            Some(event) = next_push(&mut pushes) => {
                tracing::info!(%event, "Push event received, refreshing feeds");
                for (_, poller) in &pollers {
                    poller.trigger();
                }
            }
        }
    }

    if let Some(live_feed) = live_feed {
        live_feed.close().await;
    }
    Ok(())
}

/// Next push payload, pending forever when there is no live channel
async fn next_push(pushes: &mut Option<watch::Receiver<Option<Value>>>) -> Option<Value> {
    let Some(rx) = pushes.as_mut() else {
        return std::future::pending().await;
    };
    if rx.changed().await.is_err() {
        *pushes = None;
        return None;
    }
    rx.borrow_and_update().clone()
}

async fn tail_live(config: &Config) -> Result<()> {
    let feed = LiveFeed::connect(
        config.live.ws_url.clone(),
        Arc::new(WsTransport),
        config.reconnect(),
    );
    let mut connected = feed.subscribe_connected();
    let mut messages = feed.subscribe_messages();
    println!("{} connecting to {}", stamp(), config.live.ws_url);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            changed = connected.changed() => {
                if changed.is_err() {
                    break;
                }
                let up = *connected.borrow_and_update();
                println!("{} {}", stamp(), if up { "connected" } else { "disconnected, retrying" });
            }
            changed = messages.changed() => {
                if changed.is_err() {
                    break;
                }
                if let Some(message) = messages.borrow_and_update().clone() {
                    println!("{} {}", stamp(), message);
                }
            }
        }
    }

    feed.close().await;
    Ok(())
}

async fn show_approvals(client: ApiClient, all: bool) -> Result<()> {
    let desk = ApprovalDesk::open(client, None);
    let state = desk.settled().await;
    if let Some(error) = state.error {
        anyhow::bail!("Failed to load approvals: {}", error);
    }

    let requests = if all { desk.approvals() } else { desk.pending() };
    print_approvals(&requests);
    Ok(())
}

async fn decide(client: ApiClient, id: &str, notes: &str, approve: bool) -> Result<()> {
    let desk = ApprovalDesk::open(client, None);
    desk.settled().await;

    let updated = if approve {
        desk.approve(id, notes).await?
    } else {
        desk.reject(id, notes).await?
    };
    println!(
        "{} {} is now {:?}",
        stamp(),
        updated.id,
        updated.status
    );

    if let Some(error) = desk.state().error {
        tracing::warn!(%error, "Approval list refresh failed after action");
    }
    print_approvals(&desk.pending());
    Ok(())
}

fn print_approvals(requests: &[ApprovalRequest]) {
    if requests.is_empty() {
        println!("No approval requests");
        return;
    }
    for r in requests {
        println!(
            "{:<12} {:<9} {:>3.0}%  {:<26} {}",
            r.id,
            format!("{:?}", r.status).to_lowercase(),
            r.confidence * 100.0,
            r.agent_name,
            r.title
        );
        println!(
            "{:<12} impact: ${:.0}, {:+.1} days, risk {}",
            "", r.impact.cost_delta, r.impact.schedule_delta_days, r.impact.risk_change
        );
    }
}

fn render(feed: Feed, state: &PollState<Value>, full: bool) {
    let name = feed.name();
    match (&state.data, &state.error, state.loading) {
        (None, None, true) => println!("{} {:<18} loading", stamp(), name),
        // A refresh of data already on screen; wait for it to settle
        (Some(_), _, true) => {}
        (None, Some(error), _) => println!("{} {:<18} error: {} (no data yet)", stamp(), name, error),
        (Some(data), Some(error), false) => println!(
            "{} {:<18} error: {} (showing last good data: {})",
            stamp(),
            name,
            error,
            summarize(data)
        ),
        (Some(data), None, false) => {
            if full {
                let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
                println!("{} {:<18}\n{}", stamp(), name, pretty);
            } else {
                println!("{} {:<18} {}", stamp(), name, summarize(data));
            }
        }
        (None, None, false) => println!("{} {:<18} no data", stamp(), name),
    }
}

fn summarize(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(fields) => format!("{} fields", fields.len()),
        other => other.to_string(),
    }
}

fn stamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
