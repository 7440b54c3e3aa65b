use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{trace, warn};

use repwin_shared::{sequence_greater_than, Connection, MultiplayerPacket, PacketId, Reliability};

/// A packet waiting to be written to the socket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingPacket {
    pub packet_id: PacketId,
    pub reliability: Reliability,
    pub packet: MultiplayerPacket,
}

/// Queued or unacknowledged packets beyond this mean the transport is not
/// keeping up
pub const OUTGOING_HIGH_WATER_MARK: usize = 1024;

struct QueueState {
    next_packet_id: PacketId,
    outgoing: VecDeque<OutgoingPacket>,
    reliable_in_flight: VecDeque<PacketId>,
}

/// A `Connection` that stamps each packet with the next wrapping `PacketId`
/// and queues it for the transport to drain.
///
/// Clones share the same queue: hand one clone to a replication window and
/// keep another on the transport side, which may live on its own thread.
/// The transport must `drain` every tick and `acknowledge` reliable packets;
/// the queue itself never drops anything, and logs a warning each time it
/// grows past `OUTGOING_HIGH_WATER_MARK`.
#[derive(Clone)]
pub struct OutgoingPacketQueue {
    state: Arc<Mutex<QueueState>>,
}

impl OutgoingPacketQueue {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(QueueState {
                next_packet_id: 0,
                outgoing: VecDeque::new(),
                reliable_in_flight: VecDeque::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes and returns every queued packet, oldest first
    pub fn drain(&self) -> Vec<OutgoingPacket> {
        self.state().outgoing.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.state().outgoing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().outgoing.is_empty()
    }

    /// Number of reliable packets sent but not yet acknowledged
    pub fn reliable_in_flight(&self) -> usize {
        self.state().reliable_in_flight.len()
    }

    /// Whether queued or unacknowledged packets have reached
    /// `OUTGOING_HIGH_WATER_MARK`
    pub fn is_backed_up(&self) -> bool {
        let state = self.state();
        state.outgoing.len() >= OUTGOING_HIGH_WATER_MARK
            || state.reliable_in_flight.len() >= OUTGOING_HIGH_WATER_MARK
    }

    /// Acknowledges every reliable packet up to and including `packet_id`
    pub fn acknowledge(&self, packet_id: PacketId) {
        let mut state = self.state();
        while let Some(&in_flight) = state.reliable_in_flight.front() {
            if sequence_greater_than(in_flight, packet_id) {
                break;
            }
            state.reliable_in_flight.pop_front();
        }
    }

    fn enqueue(&self, packet: MultiplayerPacket, reliability: Reliability) -> PacketId {
        let mut state = self.state();

        let packet_id = state.next_packet_id;
        state.next_packet_id = state.next_packet_id.wrapping_add(1);

        if reliability == Reliability::Reliable {
            state.reliable_in_flight.push_back(packet_id);
            if state.reliable_in_flight.len() == OUTGOING_HIGH_WATER_MARK {
                warn!(
                    "{} reliable packets unacknowledged, transport is not acknowledging",
                    OUTGOING_HIGH_WATER_MARK
                );
            }
        }
        trace!("queued {} packet {} ({:?})", packet.name(), packet_id, reliability);
        state.outgoing.push_back(OutgoingPacket {
            packet_id,
            reliability,
            packet,
        });
        if state.outgoing.len() == OUTGOING_HIGH_WATER_MARK {
            warn!("{} packets queued, transport is not draining", OUTGOING_HIGH_WATER_MARK);
        }

        packet_id
    }
}

impl Default for OutgoingPacketQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection for OutgoingPacketQueue {
    fn send_reliable_packet(&mut self, packet: MultiplayerPacket) -> PacketId {
        self.enqueue(packet, Reliability::Reliable)
    }

    fn send_unreliable_packet(&mut self, packet: MultiplayerPacket) -> PacketId {
        self.enqueue(packet, Reliability::Unreliable)
    }
}
