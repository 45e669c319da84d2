use switchboard_core::ServerEvent;
use switchboard_server::RelayCommand;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{collect_deliveries, connect_peer, expect_silence, join_room};

#[tokio::test]
async fn test_disconnect_notifies_every_room() {
    init_tracing();

    let (cmd_tx, mut delivery_rx, _output) = create_test_relay();

    // Alice shares room "a" with Bob and room "b" with Carol.
    let alice = connect_peer(&cmd_tx).await.expect("Failed to connect");
    let bob = connect_peer(&cmd_tx).await.expect("Failed to connect");
    let carol = connect_peer(&cmd_tx).await.expect("Failed to connect");

    join_room(&cmd_tx, bob, "a", Some("Bob"))
        .await
        .expect("Bob failed to join");
    join_room(&cmd_tx, carol, "b", Some("Carol"))
        .await
        .expect("Carol failed to join");
    join_room(&cmd_tx, alice, "a", Some("Alice"))
        .await
        .expect("Alice failed to join a");
    join_room(&cmd_tx, alice, "b", None)
        .await
        .expect("Alice failed to join b");
    collect_deliveries(&mut delivery_rx, 6).await;

    cmd_tx
        .send(RelayCommand::Disconnect { peer_id: alice })
        .await
        .expect("Failed to send Disconnect");

    // One user-left per shared room, in whatever room order.
    let mut notified: Vec<_> = collect_deliveries(&mut delivery_rx, 2)
        .await
        .into_iter()
        .map(|(recipient, event)| {
            assert_eq!(event, ServerEvent::UserLeft(alice));
            recipient
        })
        .collect();
    notified.sort_by_key(|recipient| recipient.to_string());

    let mut expected = vec![bob, carol];
    expected.sort_by_key(|recipient| recipient.to_string());
    assert_eq!(notified, expected);

    expect_silence(&mut delivery_rx).await;
}
