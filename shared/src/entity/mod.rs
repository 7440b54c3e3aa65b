pub mod entity_handle;
pub mod net_entity_id;
pub mod net_entity_role;
