use std::time::Duration;

use log::debug;

use crate::{HostFrameId, HostTimeMs};

/// Source of the host time stamped into entity update packets, so that a
/// receiver can order updates and interpolate between them.
pub trait NetworkTime {
    /// Host time in milliseconds. Never decreases.
    fn host_time_ms(&self) -> HostTimeMs;
    /// Identifier of the current host frame
    fn host_frame_id(&self) -> HostFrameId;
}

/// A `NetworkTime` advanced by a fixed interval once per network tick.
#[derive(Clone, Debug)]
pub struct HostClock {
    tick_interval: Duration,
    host_time_ms: HostTimeMs,
    host_frame_id: HostFrameId,
}

impl HostClock {
    pub fn new(tick_interval: Duration) -> Self {
        Self::starting_at(tick_interval, 0, HostFrameId::default())
    }

    pub fn starting_at(
        tick_interval: Duration,
        host_time_ms: HostTimeMs,
        host_frame_id: HostFrameId,
    ) -> Self {
        Self {
            tick_interval,
            host_time_ms,
            host_frame_id,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Moves the clock forward by one tick
    pub fn advance(&mut self) {
        let interval_ms = u64::try_from(self.tick_interval.as_millis()).unwrap_or(u64::MAX);
        self.host_time_ms = self.host_time_ms.saturating_add(interval_ms);
        self.host_frame_id = self.host_frame_id.next();
        if self.host_frame_id.get() == 0 {
            debug!("host frame id wrapped at {} ms", self.host_time_ms);
        }
    }
}

impl NetworkTime for HostClock {
    fn host_time_ms(&self) -> HostTimeMs {
        self.host_time_ms
    }

    fn host_frame_id(&self) -> HostFrameId {
        self.host_frame_id
    }
}
