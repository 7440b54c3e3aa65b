pub mod entity_messages;
pub mod packets;
