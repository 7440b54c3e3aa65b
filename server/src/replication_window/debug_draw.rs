use glam::Vec3;

use repwin_shared::{NetEntityRole, NetworkEntityHandle};

/// A visualizer a replication window can draw its state into.
///
/// Methods take `&self`; drawing never mutates the window.
pub trait DebugDraw {
    fn draw_area_of_interest(&self, center: Vec3, radius: f32);

    fn draw_entity(&self, entity: NetworkEntityHandle, position: Vec3, role: NetEntityRole);
}
