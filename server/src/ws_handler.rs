use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use common::{ClientMessage, ServerMessage, log};

use crate::session::GameSession;
use crate::web_server::WebServerState;

pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let (tx, mut rx) = mpsc::channel::<ServerMessage>(128);

    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            match serde_json::to_string(&message) {
                Ok(text) => {
                    if ws_sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log!("Failed to encode server message: {}", e);
                }
            }
        }
    });

    let mut session = GameSession::new(state.config.bot_move_delay_ms, tx);

    log!("WebSocket client connected");

    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(message) => {
                let text = match message {
                    Message::Text(text) => text,
                    Message::Close(_) => break,
                    _ => continue,
                };

                let client_message: ClientMessage = match serde_json::from_str(&text) {
                    Ok(m) => m,
                    Err(e) => {
                        log!("Failed to decode client message: {}", e);
                        session
                            .send_error(format!("Malformed message: {}", e))
                            .await;
                        continue;
                    }
                };

                match client_message {
                    ClientMessage::NewGame { first_player } => {
                        session.start_new_game(first_player).await;
                    }
                    ClientMessage::PlaceMark { position } => {
                        session.handle_place_mark(position).await;
                    }
                }
            }
            Err(e) => {
                log!("WebSocket error: {}", e);
                break;
            }
        }
    }

    log!("WebSocket connection ended");
    send_task.abort();
}
