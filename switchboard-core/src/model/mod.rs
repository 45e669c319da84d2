mod event;
mod peer;
mod room;

pub use event::{ClientEvent, RoomMember, ServerEvent};
pub use peer::PeerId;
pub use room::RoomId;
