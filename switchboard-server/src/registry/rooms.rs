use std::collections::{HashMap, HashSet};

use switchboard_core::{PeerId, RoomId};

/// Room membership, keyed by room id.
///
/// Rooms are never created or deleted explicitly: a room exists exactly
/// while it has members. The first join creates it, removing the last
/// member deletes it, so an id always refers to a live, non-empty room.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, HashSet<PeerId>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `conn_id` to a room, creating the room if needed.
    ///
    /// Returns the members present before this join (never including
    /// `conn_id`) and whether membership actually changed. Joining a room
    /// twice changes nothing but still yields the snapshot.
    pub fn join(&mut self, room_id: &RoomId, conn_id: PeerId) -> (Vec<PeerId>, bool) {
        let members = self.rooms.entry(room_id.clone()).or_default();
        let existing = members
            .iter()
            .copied()
            .filter(|member| *member != conn_id)
            .collect();
        let newly_joined = members.insert(conn_id);

        (existing, newly_joined)
    }

    /// Removes `conn_id` from a room, deleting the room if that empties it.
    /// Returns whether membership actually changed.
    pub fn leave(&mut self, room_id: &RoomId, conn_id: PeerId) -> bool {
        let Some(members) = self.rooms.get_mut(room_id) else {
            return false;
        };

        let was_member = members.remove(&conn_id);
        if members.is_empty() {
            self.rooms.remove(room_id);
        }

        was_member
    }

    /// Removes `conn_id` from every room it belongs to and returns the ids
    /// of the rooms it was actually in.
    pub fn leave_all(&mut self, conn_id: PeerId) -> Vec<RoomId> {
        let joined: Vec<RoomId> = self
            .rooms
            .iter()
            .filter(|(_, members)| members.contains(&conn_id))
            .map(|(room_id, _)| room_id.clone())
            .collect();

        for room_id in &joined {
            self.leave(room_id, conn_id);
        }

        joined
    }

    /// Current members of a room; empty when the room does not exist.
    pub fn members_of(&self, room_id: &RoomId) -> Vec<PeerId> {
        self.rooms
            .get(room_id)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }
}
