use glam::Vec3;

use repwin_shared::NetworkEntityHandle;

/// How an entity's relevance to a connection is decided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelevanceClass {
    /// Relevant to connections whose controlled entity is within the
    /// awareness radius, or that explicitly subscribed to it
    Spatial,
    /// Relevant to every connection regardless of distance
    AlwaysRelevant,
    /// Server-only, never replicated
    Never,
}

/// What a replication window needs to know about an entity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityRecord {
    pub handle: NetworkEntityHandle,
    pub position: Vec3,
    pub relevance: RelevanceClass,
}

impl EntityRecord {
    pub fn new(handle: NetworkEntityHandle, position: Vec3, relevance: RelevanceClass) -> Self {
        Self {
            handle,
            position,
            relevance,
        }
    }
}

/// Read access to the server's entity registry, queried by replication
/// windows when they recompute interest
pub trait EntityWorld {
    /// All entities currently alive on the server
    fn entity_records(&self) -> Vec<EntityRecord>;

    fn entity_record(&self, entity: &NetworkEntityHandle) -> Option<EntityRecord>;

    fn has_entity(&self, entity: &NetworkEntityHandle) -> bool {
        self.entity_record(entity).is_some()
    }
}
