use log::trace;

use repwin_shared::{
    Connection, EntityRpcsPacket, EntityUpdatesPacket, NetEntityId, NetworkEntityRpcVector,
    NetworkEntityUpdateVector, NetworkTime, PacketId, Reliability, ReplicatorResetPacket,
};

/// Turns batches handed to a replication window into packets on the window's
/// connection. Shared by every window kind, so that a window that selects no
/// entities still has working send paths.
pub(crate) struct WindowSender {
    connection: Box<dyn Connection>,
    reset_packet_capacity: usize,
}

impl WindowSender {
    /// # Panics
    ///
    /// Panics if `reset_packet_capacity` is zero. Resets could never be sent.
    pub fn new(connection: Box<dyn Connection>, reset_packet_capacity: usize) -> Self {
        assert!(
            reset_packet_capacity > 0,
            "replication window requires a reset packet capacity of at least 1"
        );
        Self {
            connection,
            reset_packet_capacity,
        }
    }

    pub fn reset_packet_capacity(&self) -> usize {
        self.reset_packet_capacity
    }

    pub fn send_entity_update_messages(
        &mut self,
        time: &dyn NetworkTime,
        entity_updates: NetworkEntityUpdateVector,
    ) -> Option<PacketId> {
        if entity_updates.is_empty() {
            return None;
        }

        let packet = EntityUpdatesPacket::new(
            time.host_time_ms(),
            time.host_frame_id(),
            entity_updates,
        );
        let packet_id = self.connection.send_unreliable_packet(packet.into());
        trace!("sent EntityUpdates packet {}", packet_id);

        Some(packet_id)
    }

    pub fn send_entity_rpcs(&mut self, entity_rpcs: NetworkEntityRpcVector, reliable: bool) {
        let reliability = if reliable {
            Reliability::Reliable
        } else {
            Reliability::Unreliable
        };
        let packet_id = self
            .connection
            .send_packet(EntityRpcsPacket::new(entity_rpcs).into(), reliability);
        trace!("sent {:?} EntityRpcs packet {}", reliability, packet_id);
    }

    pub fn send_entity_resets(&mut self, reset_ids: &[NetEntityId]) {
        let mut packet = ReplicatorResetPacket::with_capacity(self.reset_packet_capacity);

        for net_entity_id in reset_ids {
            if packet.entity_ids().is_full() {
                self.connection.send_unreliable_packet(packet.take().into());
            }
            let pushed = packet.entity_ids_mut().push(*net_entity_id);
            debug_assert!(pushed.is_ok(), "reset packet is flushed before it overflows");
        }

        if !packet.entity_ids().is_empty() {
            self.connection.send_unreliable_packet(packet.into());
        }
    }
}
