use crate::{
    BoundedVec, HostFrameId, HostTimeMs, NetEntityId, NetworkEntityRpcVector,
    NetworkEntityUpdateVector,
};

/// Entity state deltas for one tick. Always sent unreliably, a later tick
/// supersedes a lost one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityUpdatesPacket {
    host_time_ms: HostTimeMs,
    host_frame_id: HostFrameId,
    entity_messages: NetworkEntityUpdateVector,
}

impl EntityUpdatesPacket {
    pub fn new(
        host_time_ms: HostTimeMs,
        host_frame_id: HostFrameId,
        entity_messages: NetworkEntityUpdateVector,
    ) -> Self {
        Self {
            host_time_ms,
            host_frame_id,
            entity_messages,
        }
    }

    pub fn host_time_ms(&self) -> HostTimeMs {
        self.host_time_ms
    }

    pub fn host_frame_id(&self) -> HostFrameId {
        self.host_frame_id
    }

    pub fn entity_messages(&self) -> &NetworkEntityUpdateVector {
        &self.entity_messages
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRpcsPacket {
    entity_rpcs: NetworkEntityRpcVector,
}

impl EntityRpcsPacket {
    pub fn new(entity_rpcs: NetworkEntityRpcVector) -> Self {
        Self { entity_rpcs }
    }

    pub fn entity_rpcs(&self) -> &NetworkEntityRpcVector {
        &self.entity_rpcs
    }
}

/// Asks the remote side to discard replication state for a bounded list of
/// entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplicatorResetPacket {
    entity_ids: BoundedVec<NetEntityId>,
}

impl ReplicatorResetPacket {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entity_ids: BoundedVec::with_capacity(capacity),
        }
    }

    pub fn entity_ids(&self) -> &BoundedVec<NetEntityId> {
        &self.entity_ids
    }

    pub fn entity_ids_mut(&mut self) -> &mut BoundedVec<NetEntityId> {
        &mut self.entity_ids
    }

    /// Moves the ids out into a new packet, leaving this one empty
    pub fn take(&mut self) -> Self {
        Self {
            entity_ids: self.entity_ids.take(),
        }
    }
}

/// Every packet kind a replication window hands to its connection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MultiplayerPacket {
    EntityUpdates(EntityUpdatesPacket),
    EntityRpcs(EntityRpcsPacket),
    RequestReplicatorReset(ReplicatorResetPacket),
}

impl MultiplayerPacket {
    pub fn name(&self) -> &'static str {
        match self {
            MultiplayerPacket::EntityUpdates(_) => "EntityUpdates",
            MultiplayerPacket::EntityRpcs(_) => "EntityRpcs",
            MultiplayerPacket::RequestReplicatorReset(_) => "RequestReplicatorReset",
        }
    }
}

impl From<EntityUpdatesPacket> for MultiplayerPacket {
    fn from(packet: EntityUpdatesPacket) -> Self {
        MultiplayerPacket::EntityUpdates(packet)
    }
}

impl From<EntityRpcsPacket> for MultiplayerPacket {
    fn from(packet: EntityRpcsPacket) -> Self {
        MultiplayerPacket::EntityRpcs(packet)
    }
}

impl From<ReplicatorResetPacket> for MultiplayerPacket {
    fn from(packet: ReplicatorResetPacket) -> Self {
        MultiplayerPacket::RequestReplicatorReset(packet)
    }
}
