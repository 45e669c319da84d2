//! Wire model shared by the switchboard signaling server and its tests.
//!
//! Every frame on the signaling channel is a JSON object with an `event`
//! tag and a `data` payload:
//!
//! ```json
//! { "event": "join-room", "data": { "roomId": "demo", "userName": "Alice" } }
//! ```
//!
//! Session descriptions and ICE candidates are opaque to the server. They
//! are carried as raw JSON values and forwarded byte-for-byte to the peer
//! they address.

mod model;

pub use model::{ClientEvent, PeerId, RoomId, RoomMember, ServerEvent};
