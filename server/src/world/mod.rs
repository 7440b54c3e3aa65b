pub mod entity_replicators;
pub mod entity_world;
