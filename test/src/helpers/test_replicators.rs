use std::collections::HashMap;

use repwin_server::{EntityReplicators, EntityRpcBatches, ServicedEntity};
use repwin_shared::{
    ConnectionId, NetworkEntityRpcMessage, NetworkEntityUpdateMessage, NetworkEntityUpdateVector,
};

/// Replicators that emit one update per serviced entity, plus whatever RPCs
/// the test queued for a connection
#[derive(Default)]
pub struct TestReplicators {
    pub serviced: HashMap<ConnectionId, Vec<ServicedEntity>>,
    pub queued_rpcs: HashMap<ConnectionId, EntityRpcBatches>,
}

impl TestReplicators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_rpc(
        &mut self,
        connection_id: ConnectionId,
        rpc: NetworkEntityRpcMessage,
        reliable: bool,
    ) {
        let batches = self.queued_rpcs.entry(connection_id).or_default();
        if reliable {
            batches.reliable.push(rpc);
        } else {
            batches.unreliable.push(rpc);
        }
    }
}

impl EntityReplicators for TestReplicators {
    fn collect_updates(
        &mut self,
        connection_id: ConnectionId,
        serviced: &[ServicedEntity],
    ) -> NetworkEntityUpdateVector {
        self.serviced.insert(connection_id, serviced.to_vec());
        serviced
            .iter()
            .map(|entity| {
                let id = entity.handle.net_entity_id();
                NetworkEntityUpdateMessage::new(id, id.to_u64().to_le_bytes().to_vec())
            })
            .collect()
    }

    fn collect_rpcs(
        &mut self,
        connection_id: ConnectionId,
        _serviced: &[ServicedEntity],
    ) -> EntityRpcBatches {
        self.queued_rpcs.remove(&connection_id).unwrap_or_default()
    }
}
