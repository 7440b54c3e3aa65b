//! # Repwin Server
//! Per-connection replication windows for a server-authoritative host.
//! Each connection owns a window that decides which entities are relevant to
//! it, which role it sees for each, and batches entity updates, RPCs and
//! replicator resets into packets handed to the connection.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use repwin_shared::{
        Connection, ConnectionId, EntityRpcsPacket, EntityUpdatesPacket, HostClock, HostFrameId,
        HostTimeMs, MultiplayerPacket, NetEntityId, NetEntityIdSet, NetEntityRole,
        NetworkEntityHandle, NetworkEntityRpcMessage, NetworkEntityRpcVector,
        NetworkEntityUpdateMessage, NetworkEntityUpdateVector, NetworkTime, PacketId,
        Reliability, ReplicationSet, ReplicatorResetPacket,
    };
}

mod connection;
mod error;
mod replication_manager;
mod replication_window;
mod server;
mod world;

pub use connection::outgoing_queue::{OutgoingPacket, OutgoingPacketQueue, OUTGOING_HIGH_WATER_MARK};
pub use error::{ConfigError, ReplicationManagerError};
pub use replication_manager::ReplicationManager;
pub use replication_window::{
    debug_draw::DebugDraw, null_window::NullReplicationWindow,
    server_to_client::ServerToClientReplicationWindow, ReplicationWindow, WindowKind,
};
pub use server::{server_config::ServerConfig, window_config::WindowConfig};
pub use world::{
    entity_replicators::{EntityReplicators, EntityRpcBatches, ServicedEntity},
    entity_world::{EntityRecord, EntityWorld, RelevanceClass},
};
