/// How a connection should treat a given entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NetEntityRole {
    /// The entity is not in the connection's window
    #[default]
    InvalidRole,
    /// The connection is the authoritative owner of the entity. Never
    /// assigned by a server-to-client window.
    Authority,
    /// The connection controls the entity locally, e.g. its player avatar
    Autonomous,
    /// The entity is replicated to the connection, receive-only
    Simulated,
}

impl NetEntityRole {
    /// Returns true for every role except `InvalidRole`
    pub fn is_valid(self) -> bool {
        self != NetEntityRole::InvalidRole
    }

    /// Returns true if a replicator for an entity with this role is a proxy,
    /// i.e. the connection is not its authority and does not control it
    pub fn is_proxy(self) -> bool {
        self == NetEntityRole::Simulated
    }
}
