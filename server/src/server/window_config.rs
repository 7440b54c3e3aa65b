use std::default::Default;

use repwin_shared::MAX_RESET_ENTITY_IDS;

use crate::ConfigError;

/// Contains Config properties which will be used by each connection's
/// area-of-interest replication window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Spatial entities further than this from the connection's controlled
    /// entity are not relevant to it
    pub awareness_radius: f32,
    /// Maximum number of entities a single window may hold
    pub max_entities: usize,
    /// Maximum number of proxy entity replicators serviced per tick
    pub max_proxy_entity_replicator_send_count: u32,
    /// Maximum number of entity ids carried by one replicator reset packet
    pub reset_packet_capacity: usize,
}

impl WindowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reset_packet_capacity == 0 {
            return Err(ConfigError::ZeroResetCapacity {
                capacity: self.reset_packet_capacity,
            });
        }
        if !self.awareness_radius.is_finite() || self.awareness_radius < 0.0 {
            return Err(ConfigError::InvalidAwarenessRadius {
                radius: self.awareness_radius,
            });
        }
        if self.max_entities == 0 {
            return Err(ConfigError::ZeroMaxEntities);
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            awareness_radius: 500.0,
            max_entities: 512,
            max_proxy_entity_replicator_send_count: 128,
            reset_packet_capacity: MAX_RESET_ENTITY_IDS,
        }
    }
}
