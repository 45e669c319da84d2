use serde_json::json;
use switchboard_core::ServerEvent;
use switchboard_server::RelayCommand;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_peer, expect_silence, next_delivery};

/// Signals route by session id alone. Sharing a room is how peers discover
/// each other, not a precondition the relay enforces.
#[tokio::test]
async fn test_relay_works_without_rooms() {
    init_tracing();

    let (cmd_tx, mut delivery_rx, _output) = create_test_relay();

    let alice = connect_peer(&cmd_tx).await.expect("Failed to connect");
    let bob = connect_peer(&cmd_tx).await.expect("Failed to connect");

    let sdp = json!({ "type": "offer", "sdp": "v=0" });
    cmd_tx
        .send(RelayCommand::Offer {
            peer_id: alice,
            target: bob,
            offer: sdp.clone(),
        })
        .await
        .expect("Failed to send Offer");

    let (recipient, event) = next_delivery(&mut delivery_rx).await;
    assert_eq!(recipient, bob);
    assert_eq!(
        event,
        ServerEvent::Offer {
            offer: sdp,
            user_id: alice,
        }
    );

    expect_silence(&mut delivery_rx).await;
}
