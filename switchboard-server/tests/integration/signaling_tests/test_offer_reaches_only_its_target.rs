use serde_json::json;
use switchboard_core::ServerEvent;
use switchboard_server::RelayCommand;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{collect_deliveries, connect_peer, expect_silence, join_room, next_delivery};

#[tokio::test]
async fn test_offer_reaches_only_its_target() {
    init_tracing();

    let (cmd_tx, mut delivery_rx, _output) = create_test_relay();

    let alice = connect_peer(&cmd_tx).await.expect("Failed to connect");
    let bob = connect_peer(&cmd_tx).await.expect("Failed to connect");
    let carol = connect_peer(&cmd_tx).await.expect("Failed to connect");
    for (peer, name) in [(alice, "Alice"), (bob, "Bob"), (carol, "Carol")] {
        join_room(&cmd_tx, peer, "lobby", Some(name))
            .await
            .expect("Failed to join");
    }
    // Drain the three joins: one snapshot each plus three announcements.
    collect_deliveries(&mut delivery_rx, 6).await;

    let sdp = json!({ "type": "offer", "sdp": "v=0\r\no=- 4611 2 IN IP4 127.0.0.1" });
    cmd_tx
        .send(RelayCommand::Offer {
            peer_id: alice,
            target: bob,
            offer: sdp.clone(),
        })
        .await
        .expect("Failed to send Offer");

    // Only Bob receives it, stamped with Alice as the sender and the
    // payload untouched.
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
