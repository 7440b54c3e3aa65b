use repwin_shared::{
    ConnectionId, NetEntityRole, NetworkEntityHandle, NetworkEntityRpcVector,
    NetworkEntityUpdateVector,
};

/// An entity whose replicator is serviced for a connection this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServicedEntity {
    pub handle: NetworkEntityHandle,
    pub role: NetEntityRole,
}

/// RPCs that became due for a connection, split by delivery class
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRpcBatches {
    pub reliable: NetworkEntityRpcVector,
    pub unreliable: NetworkEntityRpcVector,
}

impl EntityRpcBatches {
    pub fn is_empty(&self) -> bool {
        self.reliable.is_empty() && self.unreliable.is_empty()
    }
}

/// The per-entity replicators that produce serialized state deltas and
/// remote calls. The replication window only batches and sends their output.
pub trait EntityReplicators {
    fn collect_updates(
        &mut self,
        connection_id: ConnectionId,
        serviced: &[ServicedEntity],
    ) -> NetworkEntityUpdateVector;

    fn collect_rpcs(
        &mut self,
        connection_id: ConnectionId,
        serviced: &[ServicedEntity],
    ) -> EntityRpcBatches;
}
