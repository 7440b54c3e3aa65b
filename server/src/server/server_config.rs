use std::{default::Default, time::Duration};

use crate::{ConfigError, WindowConfig, WindowKind};

/// Contains Config properties which will be used by the `ReplicationManager`
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Window built for new connections unless the caller picks one
    pub default_window_kind: WindowKind,
    /// Used to configure area-of-interest windows
    pub window: WindowConfig,
    /// Interval of the network tick that drives `send_all_packets`
    pub tick_interval: Duration,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_window_kind: WindowKind::AreaOfInterest,
            window: WindowConfig::default(),
            tick_interval: Duration::from_millis(50),
        }
    }
}
