use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use switchboard_core::{PeerId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::relay::RelayOutput;

/// Writer handles of every live WebSocket session.
///
/// Each session registers the unbounded sender drained by its own write
/// task, so queueing an event here never blocks the relay. Cheap to clone;
/// all clones share the map.
#[derive(Clone, Default)]
pub struct SessionMap {
    peers: Arc<DashMap<PeerId, mpsc::UnboundedSender<Message>>>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, peer_id: PeerId, tx: mpsc::UnboundedSender<Message>) {
        self.peers.insert(peer_id, tx);
    }

    pub fn remove(&self, peer_id: &PeerId) {
        self.peers.remove(peer_id);
    }

    /// Serializes one event and queues it for one session.
    ///
    /// Unknown ids happen in normal operation (stale targets, peers that
    /// just left) and are dropped without a trace on the wire. A dropped
    /// delivery never affects the rest of a broadcast.
    pub fn send_event(&self, peer_id: PeerId, event: &ServerEvent) {
        let Some(peer) = self.peers.get(&peer_id) else {
            debug!("Dropping event for unknown session {peer_id}");
            return;
        };

        match serde_json::to_string(event) {
            Ok(json) => {
                if peer.send(Message::Text(json.into())).is_err() {
                    error!("Failed to push to writer for session {peer_id}");
                }
            }
            Err(e) => error!("Failed to serialize server event: {e}"),
        }
    }
}

#[async_trait]
impl RelayOutput for SessionMap {
    async fn send(&self, peer_id: PeerId, event: ServerEvent) {
        self.send_event(peer_id, &event);
    }
}
