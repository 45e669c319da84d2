use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::peer::PeerId;
use crate::model::room::RoomId;

/// Events a client may send over the signaling channel.
///
/// `Offer`, `Answer` and `IceCandidate` payloads are opaque: the server
/// routes them by `target_user_id` without inspecting the contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    #[serde(rename_all = "camelCase")]
    JoinRoom {
        room_id: RoomId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Offer {
        target_user_id: PeerId,
        offer: Value,
    },
    #[serde(rename_all = "camelCase")]
    Answer {
        target_user_id: PeerId,
        answer: Value,
    },
    #[serde(rename_all = "camelCase")]
    IceCandidate {
        target_user_id: PeerId,
        candidate: Value,
    },
}

/// Events the server sends. Relayed payloads carry `user_id`, the session
/// id of the peer that produced them, so the receiver knows who to answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// First frame of every session: the id the server minted for it.
    #[serde(rename_all = "camelCase")]
    Connected { user_id: PeerId },
    /// Members already in the room, sent to a session right after it joins.
    ExistingUsers(Vec<RoomMember>),
    #[serde(rename_all = "camelCase")]
    UserJoined {
        user_id: PeerId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_name: Option<String>,
    },
    UserLeft(PeerId),
    #[serde(rename_all = "camelCase")]
    Offer { offer: Value, user_id: PeerId },
    #[serde(rename_all = "camelCase")]
    Answer { answer: Value, user_id: PeerId },
    #[serde(rename_all = "camelCase")]
    IceCandidate { candidate: Value, user_id: PeerId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMember {
    pub user_id: PeerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}
