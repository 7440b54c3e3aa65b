use std::collections::{hash_map, HashMap};

use thiserror::Error;

use crate::{NetEntityRole, NetworkEntityHandle};

/// Errors that can occur when mutating a `ReplicationSet`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationSetError {
    /// `InvalidRole` means "not in the set" and can never be stored
    #[error("Cannot insert entity {entity:?} with InvalidRole. Remove the entity instead")]
    InvalidRole { entity: NetworkEntityHandle },
}

/// The set of entities a connection is interested in, with the role the
/// connection sees for each.
///
/// An entity present in the set always has a role other than `InvalidRole`;
/// an absent entity implicitly has `InvalidRole`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplicationSet {
    entities: HashMap<NetworkEntityHandle, NetEntityRole>,
}

impl ReplicationSet {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts or replaces the role of an entity, returning the previous role
    /// if the entity was already a member.
    pub fn insert(
        &mut self,
        entity: NetworkEntityHandle,
        role: NetEntityRole,
    ) -> Result<Option<NetEntityRole>, ReplicationSetError> {
        if !role.is_valid() {
            return Err(ReplicationSetError::InvalidRole { entity });
        }
        Ok(self.entities.insert(entity, role))
    }

    pub fn remove(&mut self, entity: &NetworkEntityHandle) -> Option<NetEntityRole> {
        self.entities.remove(entity)
    }

    pub fn contains(&self, entity: &NetworkEntityHandle) -> bool {
        self.entities.contains_key(entity)
    }

    /// The role stored for `entity`, or `None` if it is not a member
    pub fn get(&self, entity: &NetworkEntityHandle) -> Option<NetEntityRole> {
        self.entities.get(entity).copied()
    }

    /// The role stored for `entity`, or `InvalidRole` if it is not a member
    pub fn role(&self, entity: &NetworkEntityHandle) -> NetEntityRole {
        self.get(entity).unwrap_or(NetEntityRole::InvalidRole)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn iter(&self) -> hash_map::Iter<'_, NetworkEntityHandle, NetEntityRole> {
        self.entities.iter()
    }

    pub fn entities(&self) -> hash_map::Keys<'_, NetworkEntityHandle, NetEntityRole> {
        self.entities.keys()
    }
}

impl<'a> IntoIterator for &'a ReplicationSet {
    type Item = (&'a NetworkEntityHandle, &'a NetEntityRole);
    type IntoIter = hash_map::Iter<'a, NetworkEntityHandle, NetEntityRole>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
