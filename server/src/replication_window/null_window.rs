use log::trace;

use repwin_shared::{
    Connection, NetEntityId, NetEntityRole, NetworkEntityHandle, NetworkEntityRpcVector,
    NetworkEntityUpdateVector, NetworkTime, PacketId, ReplicationSet, MAX_RESET_ENTITY_IDS,
};

use super::{ReplicationWindow, WindowSender};
use crate::EntityWorld;

/// A window that never selects any entity.
///
/// Used for connections that must not carry entity replication. Its send
/// paths still work: it is a policy of replicating nothing, not a transport
/// stub.
pub struct NullReplicationWindow {
    sender: WindowSender,
    empty_set: ReplicationSet,
}

impl NullReplicationWindow {
    pub fn new(connection: Box<dyn Connection>) -> Self {
        Self::with_reset_packet_capacity(connection, MAX_RESET_ENTITY_IDS)
    }

    /// # Panics
    ///
    /// Panics if `reset_packet_capacity` is zero
    pub fn with_reset_packet_capacity(
        connection: Box<dyn Connection>,
        reset_packet_capacity: usize,
    ) -> Self {
        Self {
            sender: WindowSender::new(connection, reset_packet_capacity),
            empty_set: ReplicationSet::new(),
        }
    }
}

impl ReplicationWindow for NullReplicationWindow {
    fn replication_set_update_ready(&self) -> bool {
        true
    }

    fn replication_set(&self) -> &ReplicationSet {
        &self.empty_set
    }

    fn max_proxy_entity_replicator_send_count(&self) -> u32 {
        0
    }

    fn is_in_window(&self, _entity: &NetworkEntityHandle) -> Option<NetEntityRole> {
        None
    }

    fn add_entity(&mut self, entity: NetworkEntityHandle) -> bool {
        trace!("null window rejected entity {:?}", entity);
        false
    }

    fn remove_entity(&mut self, _entity: &NetworkEntityHandle) {}

    fn update_window(&mut self, _world: &dyn EntityWorld) {}

    fn send_entity_update_messages(
        &mut self,
        time: &dyn NetworkTime,
        entity_updates: NetworkEntityUpdateVector,
    ) -> Option<PacketId> {
        self.sender.send_entity_update_messages(time, entity_updates)
    }

    fn send_entity_rpcs(&mut self, entity_rpcs: NetworkEntityRpcVector, reliable: bool) {
        self.sender.send_entity_rpcs(entity_rpcs, reliable);
    }

    fn send_entity_resets(&mut self, reset_ids: &[NetEntityId]) {
        self.sender.send_entity_resets(reset_ids);
    }

    fn debug_draw(&self) {
        // Nothing to draw
    }
}
