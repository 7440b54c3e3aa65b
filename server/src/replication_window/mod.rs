pub mod debug_draw;
pub mod null_window;
pub mod server_to_client;

mod window_sender;

pub(crate) use window_sender::WindowSender;

use repwin_shared::{
    Connection, NetEntityId, NetEntityRole, NetworkEntityHandle, NetworkEntityRpcVector,
    NetworkEntityUpdateVector, NetworkTime, PacketId, ReplicationSet,
};

use crate::{
    ConfigError, EntityWorld, NullReplicationWindow, ServerToClientReplicationWindow,
    WindowConfig,
};

/// Interest management and outbound entity traffic for a single connection.
///
/// A window is driven once per network tick by its owner: first
/// `update_window`, then, if `replication_set_update_ready` reports true, the
/// send operations. None of the operations fail on policy outcomes; rejected
/// or unknown entities are reported through return values.
pub trait ReplicationWindow {
    /// Whether the membership computation for the current tick is committed
    /// and safe to read. Has no side effects.
    fn replication_set_update_ready(&self) -> bool;

    /// The committed set. Unchanged until the next `update_window`.
    fn replication_set(&self) -> &ReplicationSet;

    /// Upper bound on how many proxy entity replicators may be serviced this
    /// tick. Zero means replicate nothing.
    fn max_proxy_entity_replicator_send_count(&self) -> u32;

    /// Returns the entity's role if it is a member of the committed set. A
    /// returned role is never `InvalidRole`.
    fn is_in_window(&self, entity: &NetworkEntityHandle) -> Option<NetEntityRole>;

    /// Like `is_in_window`, but reports non-members as `InvalidRole`
    fn entity_role(&self, entity: &NetworkEntityHandle) -> NetEntityRole {
        self.is_in_window(entity).unwrap_or(NetEntityRole::InvalidRole)
    }

    /// Requests that the entity be included from the next `update_window` on.
    /// Returns false if the window's policy rejects it. True means the request
    /// is staged, not that the entity will be a member: an entity that is not
    /// in the world at the next update is dropped silently.
    fn add_entity(&mut self, entity: NetworkEntityHandle) -> bool;

    /// Removes the entity from the next `update_window` on. Does nothing if
    /// the entity is not a member.
    fn remove_entity(&mut self, entity: &NetworkEntityHandle);

    /// Advances interest computation by one tick. The only operation that
    /// changes the committed set.
    fn update_window(&mut self, world: &dyn EntityWorld);

    /// Committed members ordered by replication priority, highest first
    fn prioritized_entities(&self) -> Vec<(NetworkEntityHandle, NetEntityRole)> {
        let mut entities: Vec<_> = self
            .replication_set()
            .iter()
            .map(|(handle, role)| (*handle, *role))
            .collect();
        entities.sort_by_key(|(handle, _)| *handle);
        entities
    }

    /// Sends the updates as one unreliable packet stamped with the host time
    /// and frame. Returns `None` without sending when `entity_updates` is empty.
    fn send_entity_update_messages(
        &mut self,
        time: &dyn NetworkTime,
        entity_updates: NetworkEntityUpdateVector,
    ) -> Option<PacketId>;

    /// Sends the RPCs as one packet, reliably if `reliable`. An empty batch
    /// still goes out as an empty packet.
    fn send_entity_rpcs(&mut self, entity_rpcs: NetworkEntityRpcVector, reliable: bool);

    /// Sends reset requests for `reset_ids` in input order, split into as few
    /// unreliable packets as the reset packet capacity allows.
    fn send_entity_resets(&mut self, reset_ids: &[NetEntityId]);

    fn debug_draw(&self);
}

/// Which replication window to build for a connection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// Never replicates entities, e.g. for control-plane-only connections
    Null,
    /// Selects entities by distance, subscription and relevance class
    AreaOfInterest,
}

impl WindowKind {
    pub fn build(
        self,
        config: &WindowConfig,
        connection: Box<dyn Connection>,
    ) -> Result<Box<dyn ReplicationWindow>, ConfigError> {
        config.validate()?;
        let window: Box<dyn ReplicationWindow> = match self {
            WindowKind::Null => Box::new(NullReplicationWindow::with_reset_packet_capacity(
                connection,
                config.reset_packet_capacity,
            )),
            WindowKind::AreaOfInterest => {
                Box::new(ServerToClientReplicationWindow::new(config.clone(), connection)?)
            }
        };
        Ok(window)
    }
}
