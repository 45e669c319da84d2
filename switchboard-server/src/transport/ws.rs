use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use switchboard_core::{ClientEvent, PeerId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::http::AppState;
use crate::relay::RelayCommand;

/// Upgrades `GET /ws` into a signaling session.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let peer_id = PeerId::new();
    info!("New signaling session: {peer_id}");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.sessions.insert(peer_id, tx);
    if state
        .relay_tx
        .send(RelayCommand::Connect { peer_id })
        .await
        .is_err()
    {
        state.sessions.remove(&peer_id);
        return;
    }

    // Hello frame: tells the session which id the relay will stamp on
    // everything it forwards from it.
    state
        .sessions
        .send_event(peer_id, &ServerEvent::Connected { user_id: peer_id });

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay_tx = state.relay_tx.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => {
                            let cmd = RelayCommand::from_client_event(peer_id, event);
                            if relay_tx.send(cmd).await.is_err() {
                                break;
                            }
                        }
                        // The protocol has no error event; bad frames are
                        // dropped without an answer.
                        Err(e) => warn!("Invalid event from session {peer_id}: {e}"),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Disconnect is sent here rather than inside the read task so it goes
    // out exactly once however the session ends.
    state.sessions.remove(&peer_id);
    let _ = state
        .relay_tx
        .send(RelayCommand::Disconnect { peer_id })
        .await;

    info!("Signaling session closed: {peer_id}");
}
