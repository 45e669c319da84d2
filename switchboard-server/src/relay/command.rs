use serde_json::Value;
use switchboard_core::{ClientEvent, PeerId, RoomId};

/// Commands delivered to the relay by the transport layer.
///
/// This set is closed: the decoded client events plus the two lifecycle
/// notifications the transport owes the relay for every session.
#[derive(Debug)]
pub enum RelayCommand {
    /// A transport session was established.
    Connect { peer_id: PeerId },

    /// The session asked to join a room.
    Join {
        peer_id: PeerId,
        room_id: RoomId,
        user_name: Option<String>,
    },

    /// Session description offered to another peer.
    Offer {
        peer_id: PeerId,
        target: PeerId,
        offer: Value,
    },

    /// Session description answering another peer's offer.
    Answer {
        peer_id: PeerId,
        target: PeerId,
        answer: Value,
    },

    /// Connectivity candidate for another peer.
    IceCandidate {
        peer_id: PeerId,
        target: PeerId,
        candidate: Value,
    },

    /// The transport session ended, for whatever reason.
    Disconnect { peer_id: PeerId },
}

impl RelayCommand {
    /// Stamps a decoded wire event with the session it arrived on.
    pub fn from_client_event(peer_id: PeerId, event: ClientEvent) -> Self {
        match event {
            ClientEvent::JoinRoom { room_id, user_name } => Self::Join {
                peer_id,
                room_id,
                user_name,
            },
            ClientEvent::Offer {
                target_user_id,
                offer,
            } => Self::Offer {
                peer_id,
                target: target_user_id,
                offer,
            },
            ClientEvent::Answer {
                target_user_id,
                answer,
            } => Self::Answer {
                peer_id,
                target: target_user_id,
                answer,
            },
            ClientEvent::IceCandidate {
                target_user_id,
                candidate,
            } => Self::IceCandidate {
                peer_id,
                target: target_user_id,
                candidate,
            },
        }
    }
}
