// ABOUTME: Socket transport seam for live channels, plus the tokio-tungstenite implementation.
// ABOUTME: A connection is a stream of text frames that ends when the socket closes.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};

/// Frames from one open connection.
///
/// `Ok(text)` is a received frame, `Err` a transport error on an open
/// connection. The stream ending means the connection closed.
pub type FrameStream = BoxStream<'static, Result<String>>;

/// Opens connections for a [`LiveChannel`](crate::channel::LiveChannel)
pub trait Transport: Send + Sync + 'static {
    /// Transport name for logging
    fn name(&self) -> &'static str;

    /// Open a connection; resolves once the connection is open
    fn connect<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FrameStream>>;
}

type WebSocketStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// WebSocket transport (ws:// and wss://)
#[derive(Debug, Clone, Copy, Default)]
pub struct WsTransport;

impl Transport for WsTransport {
    fn name(&self) -> &'static str {
        "websocket"
    }

    fn connect<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FrameStream>> {
        Box::pin(async move {
            let (ws, _) = connect_async(url)
                .await
                .with_context(|| format!("Failed to connect to {}", url))?;
            Ok(frames(ws))
        })
    }
}

/// Text frames pass through, binary frames if they are UTF-8, control frames are skipped.
/// An error is yielded once and then the stream ends, as the socket is unusable after it.
fn frames(ws: WebSocketStream) -> FrameStream {
    stream::unfold(Some(ws), |ws| async move {
        let mut ws = ws?;
        loop {
            match ws.next().await? {
                Ok(Message::Text(text)) => return Some((Ok(text.to_string()), Some(ws))),
                Ok(Message::Binary(bytes)) => {
                    let text = String::from_utf8(bytes.to_vec())
                        .context("Binary frame is not valid UTF-8");
                    return Some((text, Some(ws)));
                }
                Ok(Message::Close(frame)) => {
                    tracing::debug!(?frame, "Server sent close frame");
                    return None;
                }
                Ok(_) => continue, // ping, pong, raw frames
                Err(e) => return Some((Err(anyhow::Error::from(e)), None)),
            }
        }
    })
    .boxed()
}
