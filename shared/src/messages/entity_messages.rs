use crate::NetEntityId;

/// A serialized state delta for a single entity, produced by that entity's
/// replicator. The payload is opaque to the replication window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkEntityUpdateMessage {
    net_entity_id: NetEntityId,
    payload: Box<[u8]>,
}

impl NetworkEntityUpdateMessage {
    pub fn new(net_entity_id: NetEntityId, payload: impl Into<Box<[u8]>>) -> Self {
        Self {
            net_entity_id,
            payload: payload.into(),
        }
    }

    pub fn net_entity_id(&self) -> NetEntityId {
        self.net_entity_id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// A remote procedure invocation targeting a single entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkEntityRpcMessage {
    net_entity_id: NetEntityId,
    rpc_index: u16,
    payload: Box<[u8]>,
}

impl NetworkEntityRpcMessage {
    pub fn new(net_entity_id: NetEntityId, rpc_index: u16, payload: impl Into<Box<[u8]>>) -> Self {
        Self {
            net_entity_id,
            rpc_index,
            payload: payload.into(),
        }
    }

    pub fn net_entity_id(&self) -> NetEntityId {
        self.net_entity_id
    }

    pub fn rpc_index(&self) -> u16 {
        self.rpc_index
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

pub type NetworkEntityUpdateVector = Vec<NetworkEntityUpdateMessage>;
pub type NetworkEntityRpcVector = Vec<NetworkEntityRpcMessage>;
/// Entity ids whose replication state must be reset remotely. Kept in input
/// order; duplicates are preserved.
pub type NetEntityIdSet = Vec<NetEntityId>;
