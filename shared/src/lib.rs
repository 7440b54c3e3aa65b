//! # Repwin Shared
//! Common functionality shared between the repwin server crate and its
//! collaborators: entity identifiers and roles, replication sets, the packets
//! a replication window emits, and the connection & network time contracts.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bounded_vec;
mod connection;
mod constants;
mod entity;
mod messages;
mod network_time;
mod replication_set;
mod types;
mod wrapping_number;

pub use bounded_vec::{BoundedVec, CapacityError};
pub use connection::{Connection, Reliability};
pub use constants::{
    MAX_PACKET_PAYLOAD_BYTES, MAX_RESET_ENTITY_IDS, NET_ENTITY_ID_BYTES,
    RESET_PACKET_HEADER_BYTES,
};
pub use entity::{
    entity_handle::NetworkEntityHandle, net_entity_id::NetEntityId,
    net_entity_role::NetEntityRole,
};
pub use messages::{
    entity_messages::{
        NetEntityIdSet, NetworkEntityRpcMessage, NetworkEntityRpcVector,
        NetworkEntityUpdateMessage, NetworkEntityUpdateVector,
    },
    packets::{EntityRpcsPacket, EntityUpdatesPacket, MultiplayerPacket, ReplicatorResetPacket},
};
pub use network_time::{HostClock, NetworkTime};
pub use replication_set::{ReplicationSet, ReplicationSetError};
pub use types::{ConnectionId, HostFrameId, HostTimeMs, PacketId};
pub use wrapping_number::{sequence_greater_than, sequence_less_than};
