/// Routing of entity updates and RPC batches onto a connection's send paths

use repwin_server::{ReplicationWindow, ServerToClientReplicationWindow, WindowConfig};
use repwin_shared::{
    MultiplayerPacket, NetEntityId, NetworkEntityRpcMessage, NetworkEntityUpdateMessage,
    Reliability,
};
use repwin_test::{init_logger, FixedTime, RecordingConnection};

fn rpc(id: u64, index: u16) -> NetworkEntityRpcMessage {
    NetworkEntityRpcMessage::new(NetEntityId::new(id), index, vec![index as u8])
}

fn window(connection: &RecordingConnection) -> ServerToClientReplicationWindow {
    ServerToClientReplicationWindow::new(WindowConfig::default(), connection.boxed()).unwrap()
}

#[test]
fn reliable_rpcs_take_reliable_path() {
    init_logger();
    let connection = RecordingConnection::new();
    let mut window = window(&connection);

    window.send_entity_rpcs(vec![rpc(1, 0), rpc(2, 1)], true);

    let sent = connection.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reliability, Reliability::Reliable);
    match &sent[0].packet {
        MultiplayerPacket::EntityRpcs(packet) => {
            assert_eq!(packet.entity_rpcs(), &vec![rpc(1, 0), rpc(2, 1)]);
        }
        other => panic!("expected EntityRpcs, got {}", other.name()),
    }
}

#[test]
fn unreliable_rpcs_take_unreliable_path() {
    let connection = RecordingConnection::new();
    let mut window = window(&connection);

    window.send_entity_rpcs(vec![rpc(3, 2)], false);

    let sent = connection.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reliability, Reliability::Unreliable);
    assert!(matches!(sent[0].packet, MultiplayerPacket::EntityRpcs(_)));
}

#[test]
fn empty_updates_and_resets_send_nothing() {
    let connection = RecordingConnection::new();
    let mut window = window(&connection);
    let time = FixedTime::new(0, 0);

    assert_eq!(window.send_entity_update_messages(&time, Vec::new()), None);
    window.send_entity_resets(&[]);

    assert_eq!(connection.sent_count(), 0);
}

#[test]
fn empty_rpc_batches_are_still_sent_on_their_path() {
    let connection = RecordingConnection::new();
    let mut window = window(&connection);

    window.send_entity_rpcs(Vec::new(), true);
    window.send_entity_rpcs(Vec::new(), false);

    let sent = connection.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].reliability, Reliability::Reliable);
    assert_eq!(sent[1].reliability, Reliability::Unreliable);
    for sent in &sent {
        let MultiplayerPacket::EntityRpcs(packet) = &sent.packet else {
            panic!("expected EntityRpcs, got {}", sent.packet.name());
        };
        assert!(packet.entity_rpcs().is_empty());
    }
}

#[test]
fn updates_are_unreliable_and_stamped_with_host_time() {
    let connection = RecordingConnection::new();
    let mut window = window(&connection);
    let updates = vec![
        NetworkEntityUpdateMessage::new(NetEntityId::new(4), vec![4]),
        NetworkEntityUpdateMessage::new(NetEntityId::new(2), vec![2]),
    ];

    let first = window.send_entity_update_messages(&FixedTime::new(100, 7), updates.clone());
    let second = window.send_entity_update_messages(&FixedTime::new(150, 8), updates.clone());

    let sent = connection.sent();
    assert_eq!(first, Some(sent[0].packet_id));
    assert_eq!(second, Some(sent[1].packet_id));
    assert_ne!(first, second);

    for (sent, (time_ms, frame)) in sent.iter().zip([(100, 7), (150, 8)]) {
        assert_eq!(sent.reliability, Reliability::Unreliable);
        let MultiplayerPacket::EntityUpdates(packet) = &sent.packet else {
            panic!("expected EntityUpdates, got {}", sent.packet.name());
        };
        assert_eq!(packet.host_time_ms(), time_ms);
        assert_eq!(packet.host_frame_id().get(), frame);
        // update order is kept as given
        assert_eq!(packet.entity_messages(), &updates);
    }
}
