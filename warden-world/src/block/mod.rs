use num_derive::FromPrimitive;
use warden_core::math::vector3::Vector3;

pub mod block_id;
pub mod block_meta;

pub use block_id::BlockId;
pub use block_meta::BlockMeta;

/// The discriminants double as the legacy facing codes carried in container
/// metadata (2 = north .. 5 = east).
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockDirection {
    Down = 0,
    Up,
    North,
    South,
    West,
    East,
}

impl BlockDirection {
    /// Horizontal faces in the order wall attachments are scanned. The first
    /// qualifying face wins, so this order is part of the engine's contract.
    pub const HORIZONTAL: [BlockDirection; 4] = [
        BlockDirection::North,
        BlockDirection::South,
        BlockDirection::East,
        BlockDirection::West,
    ];

    pub fn to_offset(&self) -> Vector3<i32> {
        match self {
            BlockDirection::Down => (0, -1, 0),
            BlockDirection::Up => (0, 1, 0),
            BlockDirection::North => (0, 0, -1),
            BlockDirection::South => (0, 0, 1),
            BlockDirection::West => (-1, 0, 0),
            BlockDirection::East => (1, 0, 0),
        }
        .into()
    }
}
