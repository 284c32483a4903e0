pub mod block;
pub mod memory;
pub mod world;

pub use memory::MemoryWorld;
pub use world::{World, WorldError};

pub const WORLD_HEIGHT: i32 = 384;
pub const WORLD_LOWEST_Y: i32 = -64;
pub const WORLD_MAX_Y: i32 = WORLD_HEIGHT + WORLD_LOWEST_Y;
