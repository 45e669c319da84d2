use async_trait::async_trait;
use switchboard_core::{PeerId, ServerEvent};

/// Outbound half of the transport, as the relay sees it.
///
/// Delivery is fire-and-forget: the relay resolves recipients by session id
/// only, and sending to an id that no longer exists must be a silent no-op.
/// No delivery failure ever flows back into the protocol.
#[async_trait]
pub trait RelayOutput: Send + Sync {
    /// Deliver one event to one session.
    async fn send(&self, peer_id: PeerId, event: ServerEvent);
}
