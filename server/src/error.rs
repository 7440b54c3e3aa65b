use thiserror::Error;

use repwin_shared::ConnectionId;

/// Errors raised while validating a `WindowConfig` or `ServerConfig`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A reset packet that holds no ids could never make progress
    #[error("reset_packet_capacity must be at least 1, got {capacity}")]
    ZeroResetCapacity { capacity: usize },

    /// The awareness radius must be a finite, non-negative distance
    #[error("awareness_radius must be finite and non-negative, got {radius}")]
    InvalidAwarenessRadius { radius: f32 },

    /// A window limited to zero entities could never replicate anything.
    /// Use `WindowKind::Null` for connections that must not replicate.
    #[error("max_entities must be at least 1. Use WindowKind::Null to disable replication")]
    ZeroMaxEntities,
}

/// Errors returned by `ReplicationManager`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplicationManagerError {
    /// A window is already registered for the connection
    #[error("{connection_id} already has a replication window")]
    ConnectionAlreadyExists { connection_id: ConnectionId },

    /// No window is registered for the connection
    #[error("{connection_id} has no replication window")]
    ConnectionNotFound { connection_id: ConnectionId },

    /// The window could not be built from the server's configuration
    #[error("Invalid window configuration: {0}")]
    Config(#[from] ConfigError),
}
