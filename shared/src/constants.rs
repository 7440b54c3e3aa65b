// Packet payload budgets

/// Largest payload (in bytes) a single packet may carry once transport
/// headers have been accounted for.
pub const MAX_PACKET_PAYLOAD_BYTES: usize = 1200;

/// Bytes reserved at the front of a replicator reset packet for its packet
/// type and id count.
pub const RESET_PACKET_HEADER_BYTES: usize = 8;

/// Serialized size of a single `NetEntityId`.
pub const NET_ENTITY_ID_BYTES: usize = 8;

/// Number of entity ids that fit in one replicator reset packet.
pub const MAX_RESET_ENTITY_IDS: usize =
    (MAX_PACKET_PAYLOAD_BYTES - RESET_PACKET_HEADER_BYTES) / NET_ENTITY_ID_BYTES;
