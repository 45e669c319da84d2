use switchboard_core::{RoomMember, ServerEvent};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{collect_deliveries, connect_peer, join_room, next_delivery};

#[tokio::test]
async fn test_names_follow_the_session() {
    init_tracing();

    let (cmd_tx, mut delivery_rx, _output) = create_test_relay();

    let bob = connect_peer(&cmd_tx).await.expect("Failed to connect");
    join_room(&cmd_tx, bob, "beta", Some("Bob"))
        .await
        .expect("Bob failed to join");
    next_delivery(&mut delivery_rx).await;

    let alice = connect_peer(&cmd_tx).await.expect("Failed to connect");
    join_room(&cmd_tx, alice, "alpha", Some("Alice"))
        .await
        .expect("Alice failed to join alpha");
    next_delivery(&mut delivery_rx).await;

    // Alice joins a second room without restating her name; the name bound
    // at her first join travels with the session.
    join_room(&cmd_tx, alice, "beta", None)
        .await
        .expect("Alice failed to join beta");

    let (recipient, event) = next_delivery(&mut delivery_rx).await;
    assert_eq!(recipient, bob);
    assert_eq!(
        event,
        ServerEvent::UserJoined {
            user_id: alice,
            user_name: Some("Alice".to_owned()),
        }
    );

    let (recipient, event) = next_delivery(&mut delivery_rx).await;
    assert_eq!(recipient, alice);
    assert_eq!(
        event,
        ServerEvent::ExistingUsers(vec![RoomMember {
            user_id: bob,
            user_name: Some("Bob".to_owned()),
        }])
    );

    // Joining beta never touched her membership in alpha.
    let carol = connect_peer(&cmd_tx).await.expect("Failed to connect");
    join_room(&cmd_tx, carol, "alpha", None)
        .await
        .expect("Carol failed to join alpha");

    let deliveries = collect_deliveries(&mut delivery_rx, 2).await;
    let snapshot = deliveries
        .into_iter()
        .find_map(|(recipient, event)| match event {
            ServerEvent::ExistingUsers(members) if recipient == carol => Some(members),
            _ => None,
        })
        .expect("Carol got no snapshot");

    assert_eq!(
        snapshot,
        vec![RoomMember {
            user_id: alice,
            user_name: Some("Alice".to_owned()),
        }]
    );
}
