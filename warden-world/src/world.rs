use num_traits::FromPrimitive;
use thiserror::Error;

use warden_core::math::position::WorldPosition;

use crate::block::{BlockDirection, BlockId, BlockMeta};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    #[error("Position {0} is outside the world's vertical range")]
    OutOfBounds(WorldPosition),
}

/// Read access to one world (dimension). Lookups return `None` for cells
/// that are absent or not loaded; callers treat those as "does not qualify",
/// never as a failure.
pub trait World {
    /// Name identifying this world; protection records are keyed by it.
    fn name(&self) -> &str;

    fn block_id_at(&self, position: WorldPosition) -> Option<BlockId>;

    fn meta_at(&self, position: WorldPosition) -> Option<BlockMeta>;

    fn relative(&self, position: WorldPosition, direction: BlockDirection) -> WorldPosition {
        WorldPosition(position.0.add(&direction.to_offset()))
    }

    /// Finds a horizontally adjacent block of exactly `id`, used to locate
    /// the second half of a double container. The anchor's facing metadata
    /// picks which axis is searched first: container fronts face along one
    /// axis, so the pair extends along the other.
    fn find_matching_neighbor_xz(
        &self,
        position: WorldPosition,
        id: BlockId,
    ) -> Option<WorldPosition> {
        use crate::block::BlockDirection::{East, North, South, West};

        let facing = self
            .meta_at(position)
            .and_then(|meta| BlockDirection::from_u8(meta.raw()));
        let order = match facing {
            Some(North | South) => [East, West, North, South],
            Some(West | East) => [North, South, East, West],
            _ => BlockDirection::HORIZONTAL,
        };

        order.into_iter().find_map(|direction| {
            let neighbor = self.relative(position, direction);
            (self.block_id_at(neighbor)? == id).then_some(neighbor)
        })
    }
}
