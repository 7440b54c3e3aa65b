use super::net_entity_id::NetEntityId;

/// A non-owning reference to a server-side entity.
///
/// Entities are owned by the server's entity registry; a replication window
/// only ever stores handles. Two handles are equal when they name the same
/// entity.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct NetworkEntityHandle {
    net_entity_id: NetEntityId,
}

impl NetworkEntityHandle {
    pub fn new(net_entity_id: NetEntityId) -> Self {
        Self { net_entity_id }
    }

    pub fn net_entity_id(&self) -> NetEntityId {
        self.net_entity_id
    }
}

impl From<NetEntityId> for NetworkEntityHandle {
    fn from(net_entity_id: NetEntityId) -> Self {
        Self::new(net_entity_id)
    }
}
