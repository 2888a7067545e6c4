//! WebSocket fan-out of the engine's broadcast topics
//!
//! One socket per topic. Each client reads through its own bounded
//! broadcast buffer; a client that falls behind skips the dropped
//! events and keeps streaming from the newest retained one, so a slow
//! consumer never backs up the matching path.

use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::stream::StreamExt;
use serde::Serialize;
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tracing::{debug, warn};

pub async fn trades_ws(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| {
        let receiver = state.engine.subscribe_trades();
        stream_topic(socket, receiver, "trades")
    })
}

pub async fn market_data_ws(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| {
        let receiver = state.engine.subscribe_market_data();
        stream_topic(socket, receiver, "market-data")
    })
}

async fn stream_topic<T: Clone + Serialize>(
    mut socket: WebSocket,
    mut receiver: Receiver<T>,
    topic: &'static str,
) {
    loop {
        tokio::select! {
            event = receiver.recv() => match event {
                Ok(event) => {
                    let payload = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(err) => {
                            warn!(topic, %err, "failed to serialize event");
                            continue;
                        }
                    };
                    if socket.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(topic, skipped, "subscriber lagged; dropped oldest events");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                // Inbound text/ping frames are ignored; these feeds are one-way.
                Some(Ok(_)) => {}
            },
        }
    }
    debug!(topic, "websocket client disconnected");
}
