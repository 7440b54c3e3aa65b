use std::collections::HashSet;

use glam::Vec3;
use log::{debug, trace};

use repwin_shared::{
    Connection, NetEntityId, NetEntityRole, NetworkEntityHandle, NetworkEntityRpcVector,
    NetworkEntityUpdateVector, NetworkTime, PacketId, ReplicationSet,
};

use super::{debug_draw::DebugDraw, ReplicationWindow, WindowSender};
use crate::{ConfigError, EntityRecord, EntityWorld, RelevanceClass, WindowConfig};

// Ordered from highest to lowest priority
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CandidateClass {
    Controlled,
    AlwaysRelevant,
    Subscribed,
    Spatial,
}

struct Candidate {
    class: CandidateClass,
    distance_squared: f32,
    record: EntityRecord,
}

/// A committed member, kept in priority order for replicator servicing and
/// debug drawing
#[derive(Clone, Copy, Debug)]
struct WindowEntry {
    handle: NetworkEntityHandle,
    role: NetEntityRole,
    position: Vec3,
}

/// The area-of-interest replication window used for client connections.
///
/// Each `update_window` rebuilds the set from scratch:
/// - the controlled entity, as `Autonomous`
/// - `AlwaysRelevant` entities
/// - entities subscribed through `add_entity`
/// - `Spatial` entities within `awareness_radius` of the controlled entity
///
/// Candidates are ranked in that order, then by distance, then by id, and
/// the first `max_entities` are kept. `add_entity` and `remove_entity` only
/// stage changes for the next update, so the committed set never changes
/// mid-tick.
pub struct ServerToClientReplicationWindow {
    config: WindowConfig,
    sender: WindowSender,
    controlled_entity: Option<NetworkEntityHandle>,
    // staged
    subscriptions: HashSet<NetworkEntityHandle>,
    exclusions: HashSet<NetworkEntityHandle>,
    // entities seen with `RelevanceClass::Never` at the last update
    never_relevant: HashSet<NetworkEntityHandle>,
    // committed
    replication_set: ReplicationSet,
    prioritized: Vec<WindowEntry>,
    area_center: Option<Vec3>,
    committed: bool,
    debug_draw: Option<Box<dyn DebugDraw>>,
}

impl ServerToClientReplicationWindow {
    pub fn new(config: WindowConfig, connection: Box<dyn Connection>) -> Result<Self, ConfigError> {
        config.validate()?;

        let sender = WindowSender::new(connection, config.reset_packet_capacity);
        debug!(
            "area-of-interest window created (radius {}, max entities {}, reset capacity {})",
            config.awareness_radius,
            config.max_entities,
            sender.reset_packet_capacity()
        );

        Ok(Self {
            replication_set: ReplicationSet::with_capacity(config.max_entities),
            config,
            sender,
            controlled_entity: None,
            subscriptions: HashSet::new(),
            exclusions: HashSet::new(),
            never_relevant: HashSet::new(),
            prioritized: Vec::new(),
            area_center: None,
            committed: false,
            debug_draw: None,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// The entity the connection controls, used as the centre of its area of
    /// interest. Takes effect on the next `update_window`.
    pub fn set_controlled_entity(&mut self, entity: Option<NetworkEntityHandle>) {
        self.controlled_entity = entity;
    }

    pub fn controlled_entity(&self) -> Option<NetworkEntityHandle> {
        self.controlled_entity
    }

    pub fn set_debug_draw(&mut self, debug_draw: Option<Box<dyn DebugDraw>>) {
        self.debug_draw = debug_draw;
    }

    fn collect_candidates(&self, world: &dyn EntityWorld, center: Option<Vec3>) -> Vec<Candidate> {
        let radius_squared = self.config.awareness_radius * self.config.awareness_radius;
        let mut candidates = Vec::new();

        for record in world.entity_records() {
            if self.exclusions.contains(&record.handle) {
                continue;
            }

            let distance_squared = center
                .map(|center| center.distance_squared(record.position))
                .unwrap_or(0.0);

            let class = if Some(record.handle) == self.controlled_entity {
                CandidateClass::Controlled
            } else {
                match record.relevance {
                    RelevanceClass::Never => continue,
                    RelevanceClass::AlwaysRelevant => CandidateClass::AlwaysRelevant,
                    RelevanceClass::Spatial => {
                        if self.subscriptions.contains(&record.handle) {
                            CandidateClass::Subscribed
                        } else if center.is_some() && distance_squared <= radius_squared {
                            CandidateClass::Spatial
                        } else {
                            continue;
                        }
                    }
                }
            };

            candidates.push(Candidate {
                class,
                distance_squared,
                record,
            });
        }

        candidates.sort_by(|a, b| {
            a.class
                .cmp(&b.class)
                .then(a.distance_squared.total_cmp(&b.distance_squared))
                .then(a.record.handle.cmp(&b.record.handle))
        });
        candidates.truncate(self.config.max_entities);

        candidates
    }
}

impl ReplicationWindow for ServerToClientReplicationWindow {
    fn replication_set_update_ready(&self) -> bool {
        self.committed
    }

    fn replication_set(&self) -> &ReplicationSet {
        &self.replication_set
    }

    fn max_proxy_entity_replicator_send_count(&self) -> u32 {
        self.config.max_proxy_entity_replicator_send_count
    }

    fn is_in_window(&self, entity: &NetworkEntityHandle) -> Option<NetEntityRole> {
        self.replication_set.get(entity)
    }

    fn add_entity(&mut self, entity: NetworkEntityHandle) -> bool {
        if self.never_relevant.contains(&entity) {
            debug!("rejected subscription to entity {:?}: never relevant", entity);
            return false;
        }

        self.exclusions.remove(&entity);

        if self.subscriptions.contains(&entity) {
            return true;
        }
        if self.subscriptions.len() >= self.config.max_entities {
            debug!(
                "rejected subscription to entity {:?}: window is at its limit of {} subscriptions",
                entity, self.config.max_entities
            );
            return false;
        }

        self.subscriptions.insert(entity);
        true
    }

    fn remove_entity(&mut self, entity: &NetworkEntityHandle) {
        let was_subscribed = self.subscriptions.remove(entity);
        if was_subscribed || self.replication_set.contains(entity) {
            self.exclusions.insert(*entity);
        }
    }

    fn update_window(&mut self, world: &dyn EntityWorld) {
        // forget staged state for entities that no longer exist
        self.subscriptions.retain(|entity| world.has_entity(entity));
        self.exclusions.retain(|entity| world.has_entity(entity));
        self.never_relevant = world
            .entity_records()
            .into_iter()
            .filter(|record| record.relevance == RelevanceClass::Never)
            .map(|record| record.handle)
            .collect();

        let center = self
            .controlled_entity
            .filter(|entity| !self.exclusions.contains(entity))
            .and_then(|entity| world.entity_record(&entity))
            .map(|record| record.position);

        let candidates = self.collect_candidates(world, center);

        let mut replication_set = ReplicationSet::with_capacity(candidates.len());
        let mut prioritized = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let role = if candidate.class == CandidateClass::Controlled {
                NetEntityRole::Autonomous
            } else {
                NetEntityRole::Simulated
            };
            if replication_set.insert(candidate.record.handle, role).is_err() {
                continue;
            }
            prioritized.push(WindowEntry {
                handle: candidate.record.handle,
                role,
                position: candidate.record.position,
            });
        }

        let entered = replication_set
            .entities()
            .filter(|entity| !self.replication_set.contains(entity))
            .count();
        let left = self
            .replication_set
            .entities()
            .filter(|entity| !replication_set.contains(entity))
            .count();
        if entered > 0 || left > 0 {
            debug!(
                "window updated: {} entities ({} entered, {} left)",
                replication_set.len(),
                entered,
                left
            );
        }

        self.replication_set = replication_set;
        self.prioritized = prioritized;
        self.area_center = center;
        self.committed = true;
    }

    fn prioritized_entities(&self) -> Vec<(NetworkEntityHandle, NetEntityRole)> {
        self.prioritized
            .iter()
            .map(|entry| (entry.handle, entry.role))
            .collect()
    }

    fn send_entity_update_messages(
        &mut self,
        time: &dyn NetworkTime,
        entity_updates: NetworkEntityUpdateVector,
    ) -> Option<PacketId> {
        self.sender.send_entity_update_messages(time, entity_updates)
    }

    fn send_entity_rpcs(&mut self, entity_rpcs: NetworkEntityRpcVector, reliable: bool) {
        self.sender.send_entity_rpcs(entity_rpcs, reliable);
    }

    fn send_entity_resets(&mut self, reset_ids: &[NetEntityId]) {
        self.sender.send_entity_resets(reset_ids);
    }

    fn debug_draw(&self) {
        let Some(debug_draw) = &self.debug_draw else {
            trace!(
                "window: {} entities, center {:?}",
                self.prioritized.len(),
                self.area_center
            );
            return;
        };

        if let Some(center) = self.area_center {
            debug_draw.draw_area_of_interest(center, self.config.awareness_radius);
        }
        for entry in &self.prioritized {
            debug_draw.draw_entity(entry.handle, entry.position, entry.role);
        }
    }
}
