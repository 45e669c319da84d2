use std::sync::Arc;

use switchboard_core::{PeerId, RoomId, RoomMember, ServerEvent};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::registry::{ConnectionRegistry, RoomRegistry};
use crate::relay::{RelayCommand, RelayOutput};

/// The signaling state machine.
///
/// Owns both registries and is the only task that touches them; commands
/// arrive through the queue and are handled to completion one at a time,
/// so every membership change and its notifications are atomic with
/// respect to each other.
pub struct SignalRelay {
    connections: ConnectionRegistry,
    rooms: RoomRegistry,
    command_rx: mpsc::Receiver<RelayCommand>,
    output: Arc<dyn RelayOutput>,
}

impl SignalRelay {
    pub fn new(command_rx: mpsc::Receiver<RelayCommand>, output: Arc<dyn RelayOutput>) -> Self {
        Self {
            connections: ConnectionRegistry::new(),
            rooms: RoomRegistry::new(),
            command_rx,
            output,
        }
    }

    /// Runs until every command sender is dropped.
    pub async fn run(mut self) {
        info!("Signal relay started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Signal relay finished");
    }

    async fn handle_command(&mut self, cmd: RelayCommand) {
        match cmd {
            RelayCommand::Connect { peer_id } => {
                debug!("Session {peer_id} connected");
                self.connections.register(peer_id, None);
            }

            RelayCommand::Join {
                peer_id,
                room_id,
                user_name,
            } => {
                self.handle_join(peer_id, room_id, user_name).await;
            }

            RelayCommand::Offer {
                peer_id,
                target,
                offer,
            } => {
                self.output
                    .send(
                        target,
                        ServerEvent::Offer {
                            offer,
                            user_id: peer_id,
                        },
                    )
                    .await;
            }

            RelayCommand::Answer {
                peer_id,
                target,
                answer,
            } => {
                self.output
                    .send(
                        target,
                        ServerEvent::Answer {
                            answer,
                            user_id: peer_id,
                        },
                    )
                    .await;
            }

            RelayCommand::IceCandidate {
                peer_id,
                target,
                candidate,
            } => {
                self.output
                    .send(
                        target,
                        ServerEvent::IceCandidate {
                            candidate,
                            user_id: peer_id,
                        },
                    )
                    .await;
            }

            RelayCommand::Disconnect { peer_id } => {
                self.handle_disconnect(peer_id).await;
            }
        }
    }

    async fn handle_join(&mut self, peer_id: PeerId, room_id: RoomId, user_name: Option<String>) {
        // A name binds to the session on its first named join and stays
        // until disconnect; later joins never rename.
        if self.connections.name_of(&peer_id).is_none() {
            self.connections.register(peer_id, user_name);
        }

        let (existing, newly_joined) = self.rooms.join(&room_id, peer_id);

        if newly_joined {
            info!(
                "Session {peer_id} joined room '{room_id}' ({} already there)",
                existing.len()
            );

            let joined = ServerEvent::UserJoined {
                user_id: peer_id,
                user_name: self.connections.name_of(&peer_id).map(str::to_owned),
            };
            for member in &existing {
                self.output.send(*member, joined.clone()).await;
            }
        } else {
            debug!("Session {peer_id} re-joined room '{room_id}'");
        }

        let members = existing
            .iter()
            .map(|id| RoomMember {
                user_id: *id,
                user_name: self.connections.name_of(id).map(str::to_owned),
            })
            .collect();
        self.output
            .send(peer_id, ServerEvent::ExistingUsers(members))
            .await;
    }

    async fn handle_disconnect(&mut self, peer_id: PeerId) {
        let affected = self.rooms.leave_all(peer_id);

        // members_of runs after the removal, so the leaver never hears
        // about itself and emptied rooms notify nobody.
        for room_id in &affected {
            for member in self.rooms.members_of(room_id) {
                self.output.send(member, ServerEvent::UserLeft(peer_id)).await;
            }
        }

        self.connections.remove(&peer_id);

        if affected.is_empty() {
            debug!("Session {peer_id} disconnected");
        } else {
            info!(
                "Session {peer_id} disconnected, left {} room(s)",
                affected.len()
            );
        }
    }
}
