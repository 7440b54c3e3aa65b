
pub use helpers::*;
pub use test_world::{entity, TestWorld};
