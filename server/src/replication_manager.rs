use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use repwin_shared::{
    Connection, ConnectionId, HostClock, NetEntityId, NetworkEntityHandle, NetworkTime, PacketId,
};

use crate::{
    EntityReplicators, EntityWorld, ReplicationManagerError, ReplicationWindow, ServerConfig,
    ServicedEntity, WindowKind,
};

struct ConnectionEntry {
    window: Box<dyn ReplicationWindow>,
    // entities the remote side currently holds replicators for
    replicated: HashSet<NetworkEntityHandle>,
}

/// Owns one replication window per connection and drives them once per tick.
///
/// Windows are independent: each is updated and flushed on its own, and no
/// state is shared between connections.
pub struct ReplicationManager {
    config: ServerConfig,
    connections: HashMap<ConnectionId, ConnectionEntry>,
}

impl ReplicationManager {
    pub fn new(config: ServerConfig) -> Result<Self, ReplicationManagerError> {
        config.validate()?;
        Ok(Self {
            config,
            connections: HashMap::new(),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// A `HostClock` ticking at the configured network tick interval
    pub fn new_clock(&self) -> HostClock {
        HostClock::new(self.config.tick_interval)
    }

    // Connections

    /// Registers an already-built window for a new connection
    pub fn add_connection(
        &mut self,
        connection_id: ConnectionId,
        window: Box<dyn ReplicationWindow>,
    ) -> Result<(), ReplicationManagerError> {
        if self.connections.contains_key(&connection_id) {
            return Err(ReplicationManagerError::ConnectionAlreadyExists { connection_id });
        }

        info!("{} added", connection_id);
        self.connections.insert(
            connection_id,
            ConnectionEntry {
                window,
                replicated: HashSet::new(),
            },
        );
        Ok(())
    }

    /// Builds a window of the given kind from the server's window config and
    /// registers it for a new connection
    pub fn add_connection_with_kind(
        &mut self,
        connection_id: ConnectionId,
        kind: WindowKind,
        connection: Box<dyn Connection>,
    ) -> Result<(), ReplicationManagerError> {
        if self.connections.contains_key(&connection_id) {
            return Err(ReplicationManagerError::ConnectionAlreadyExists { connection_id });
        }
        let window = kind.build(&self.config.window, connection)?;
        self.add_connection(connection_id, window)
    }

    /// Same as `add_connection_with_kind`, using the configured default kind
    pub fn add_default_connection(
        &mut self,
        connection_id: ConnectionId,
        connection: Box<dyn Connection>,
    ) -> Result<(), ReplicationManagerError> {
        self.add_connection_with_kind(connection_id, self.config.default_window_kind, connection)
    }

    /// Removes a closed connection, returning its window
    pub fn remove_connection(
        &mut self,
        connection_id: &ConnectionId,
    ) -> Result<Box<dyn ReplicationWindow>, ReplicationManagerError> {
        let Some(entry) = self.connections.remove(connection_id) else {
            return Err(ReplicationManagerError::ConnectionNotFound {
                connection_id: *connection_id,
            });
        };
        info!("{} removed", connection_id);
        Ok(entry.window)
    }

    pub fn has_connection(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        let mut ids: Vec<ConnectionId> = self.connections.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn window(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<&dyn ReplicationWindow, ReplicationManagerError> {
        self.connections
            .get(connection_id)
            .map(|entry| entry.window.as_ref())
            .ok_or(ReplicationManagerError::ConnectionNotFound {
                connection_id: *connection_id,
            })
    }

    pub fn window_mut(
        &mut self,
        connection_id: &ConnectionId,
    ) -> Result<&mut (dyn ReplicationWindow + 'static), ReplicationManagerError> {
        self.connections
            .get_mut(connection_id)
            .map(|entry| entry.window.as_mut())
            .ok_or(ReplicationManagerError::ConnectionNotFound {
                connection_id: *connection_id,
            })
    }

    // Entities

    /// Stages removal of a destroyed entity from every window. Reset requests
    /// for it go out with the next `send_all_packets`.
    pub fn entity_destroyed(&mut self, entity: &NetworkEntityHandle) {
        for entry in self.connections.values_mut() {
            entry.window.remove_entity(entity);
        }
    }

    // Ticks

    /// Updates every window and sends whatever became due: resets for
    /// entities that left a window, then entity updates, then RPCs.
    ///
    /// Returns the id of each entity update packet sent, per connection.
    pub fn send_all_packets(
        &mut self,
        world: &dyn EntityWorld,
        time: &dyn NetworkTime,
        replicators: &mut dyn EntityReplicators,
    ) -> Vec<(ConnectionId, PacketId)> {
        let mut connection_ids: Vec<ConnectionId> = self.connections.keys().copied().collect();

        // shuffle order of connections in order to avoid priority among them
        fastrand::shuffle(&mut connection_ids);

        let mut sent_updates = Vec::new();
        for connection_id in connection_ids {
            let Some(entry) = self.connections.get_mut(&connection_id) else {
                warn!("{} vanished during send_all_packets", connection_id);
                continue;
            };

            entry.window.update_window(world);
            if !entry.window.replication_set_update_ready() {
                continue;
            }

            let (departed, serviced) = {
                let replication_set = entry.window.replication_set();
                let mut departed: Vec<NetEntityId> = entry
                    .replicated
                    .iter()
                    .filter(|entity| !replication_set.contains(entity))
                    .map(|entity| entity.net_entity_id())
                    .collect();
                departed.sort();
                entry.replicated = replication_set.entities().copied().collect();

                (departed, select_serviced(entry.window.as_ref()))
            };

            if !departed.is_empty() {
                debug!("{}: resetting {} entities", connection_id, departed.len());
                entry.window.send_entity_resets(&departed);
            }

            let updates = replicators.collect_updates(connection_id, &serviced);
            if let Some(packet_id) = entry.window.send_entity_update_messages(time, updates) {
                sent_updates.push((connection_id, packet_id));
            }

            let rpcs = replicators.collect_rpcs(connection_id, &serviced);
            if !rpcs.reliable.is_empty() {
                entry.window.send_entity_rpcs(rpcs.reliable, true);
            }
            if !rpcs.unreliable.is_empty() {
                entry.window.send_entity_rpcs(rpcs.unreliable, false);
            }
        }

        sent_updates
    }
}

/// Every non-proxy member, plus proxies in priority order up to the window's
/// proxy budget
fn select_serviced(window: &dyn ReplicationWindow) -> Vec<ServicedEntity> {
    let budget = window.max_proxy_entity_replicator_send_count();
    let mut proxies = 0;
    let mut serviced = Vec::new();

    for (handle, role) in window.prioritized_entities() {
        if role.is_proxy() {
            if proxies >= budget {
                continue;
            }
            proxies += 1;
        }
        serviced.push(ServicedEntity { handle, role });
    }

    serviced
}
