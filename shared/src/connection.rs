use crate::{MultiplayerPacket, PacketId};

/// Delivery class of a sent packet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reliability {
    /// Retransmitted and ordered by the connection until acknowledged
    Reliable,
    /// Fire-and-forget, may be dropped or arrive out of order
    Unreliable,
}

/// The outbound half of a remote connection, as seen by a replication window.
///
/// Retransmission and ordering for reliable sends are the implementor's
/// concern. "Sent" means handed to the connection, nothing more.
pub trait Connection {
    fn send_reliable_packet(&mut self, packet: MultiplayerPacket) -> PacketId;

    fn send_unreliable_packet(&mut self, packet: MultiplayerPacket) -> PacketId;

    fn send_packet(&mut self, packet: MultiplayerPacket, reliability: Reliability) -> PacketId {
        match reliability {
            Reliability::Reliable => self.send_reliable_packet(packet),
            Reliability::Unreliable => self.send_unreliable_packet(packet),
        }
    }
}
