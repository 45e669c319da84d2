//! WebRTC signaling switchboard.
//!
//! Browser peers that want a direct WebRTC connection first need a
//! rendezvous: somewhere to discover each other and trade session
//! descriptions and ICE candidates. This crate is that rendezvous. Peers
//! connect over WebSocket, join named rooms, and the server relays their
//! negotiation blobs to one another. No media ever touches the server;
//! once peers connect directly it drops out of the path entirely.
//!
//! All protocol state lives in a single relay task ([`SignalRelay`]) fed
//! through a command queue, so every event is handled to completion before
//! the next one starts. The WebSocket layer only translates frames into
//! commands and writes whatever the relay tells it to.

pub mod config;
pub mod http;
pub mod registry;
pub mod relay;
pub mod transport;

pub use config::*;
pub use http::*;
pub use registry::*;
pub use relay::*;
pub use transport::*;
