use std::collections::HashMap;

use parking_lot::RwLock;

use warden_core::math::position::WorldPosition;

use crate::block::{BlockId, BlockMeta};
use crate::world::{World, WorldError};
use crate::{WORLD_LOWEST_Y, WORLD_MAX_Y};

/// Hash-map backed block store. Fills the world seam for embedding hosts
/// that mirror block changes into the engine, and for tests. Cells that were
/// never written read as absent, not as air.
pub struct MemoryWorld {
    name: String,
    blocks: RwLock<HashMap<WorldPosition, (BlockId, BlockMeta)>>,
}

impl MemoryWorld {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_block(
        &self,
        position: WorldPosition,
        id: BlockId,
        meta: BlockMeta,
    ) -> Result<(), WorldError> {
        if position.0.y < WORLD_LOWEST_Y || position.0.y >= WORLD_MAX_Y {
            return Err(WorldError::OutOfBounds(position));
        }
        self.blocks.write().insert(position, (id, meta));
        Ok(())
    }

    pub fn remove_block(&self, position: WorldPosition) -> Option<(BlockId, BlockMeta)> {
        self.blocks.write().remove(&position)
    }
}

impl World for MemoryWorld {
    fn name(&self) -> &str {
        &self.name
    }

    fn block_id_at(&self, position: WorldPosition) -> Option<BlockId> {
        self.blocks.read().get(&position).map(|(id, _)| *id)
    }

    fn meta_at(&self, position: WorldPosition) -> Option<BlockMeta> {
        self.blocks.read().get(&position).map(|(_, meta)| *meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockDirection;

    fn empty_world() -> MemoryWorld {
        MemoryWorld::new("world")
    }

    #[test]
    fn absent_cells_read_as_none() {
        let world = empty_world();
        assert_eq!(world.block_id_at(WorldPosition::new(1, 2, 3)), None);
        assert_eq!(world.meta_at(WorldPosition::new(1, 2, 3)), None);
    }

    #[test]
    fn set_and_remove_round_trip() {
        let world = empty_world();
        let pos = WorldPosition::new(8, 64, -3);
        world
            .set_block(pos, BlockId::CHEST, BlockMeta::new(2))
            .unwrap();
        assert_eq!(world.block_id_at(pos), Some(BlockId::CHEST));
        assert_eq!(world.meta_at(pos), Some(BlockMeta::new(2)));

        assert_eq!(
            world.remove_block(pos),
            Some((BlockId::CHEST, BlockMeta::new(2)))
        );
        assert_eq!(world.block_id_at(pos), None);
    }

    #[test]
    fn rejects_positions_outside_vertical_range() {
        let world = empty_world();
        let too_low = WorldPosition::new(0, WORLD_LOWEST_Y - 1, 0);
        assert_eq!(
            world.set_block(too_low, BlockId::CHEST, BlockMeta::NONE),
            Err(WorldError::OutOfBounds(too_low))
        );
        let too_high = WorldPosition::new(0, WORLD_MAX_Y, 0);
        assert!(world
            .set_block(too_high, BlockId::CHEST, BlockMeta::NONE)
            .is_err());
    }

    #[test]
    fn relative_moves_one_cell() {
        let world = empty_world();
        let pos = WorldPosition::new(0, 70, 0);
        assert_eq!(
            world.relative(pos, BlockDirection::North),
            WorldPosition::new(0, 70, -1)
        );
        assert_eq!(
            world.relative(pos, BlockDirection::Up),
            WorldPosition::new(0, 71, 0)
        );
    }

    #[test]
    fn container_search_prefers_the_axis_the_pair_extends_along() {
        let world = empty_world();
        let anchor = WorldPosition::new(0, 64, 0);
        // facing north (2): the pair extends east/west
        world
            .set_block(anchor, BlockId::CHEST, BlockMeta::new(2))
            .unwrap();
        world
            .set_block(WorldPosition::new(0, 64, 1), BlockId::CHEST, BlockMeta::new(2))
            .unwrap();
        world
            .set_block(WorldPosition::new(1, 64, 0), BlockId::CHEST, BlockMeta::new(2))
            .unwrap();

        assert_eq!(
            world.find_matching_neighbor_xz(anchor, BlockId::CHEST),
            Some(WorldPosition::new(1, 64, 0))
        );
    }

    #[test]
    fn container_search_ignores_other_block_types() {
        let world = empty_world();
        let anchor = WorldPosition::new(0, 64, 0);
        world
            .set_block(anchor, BlockId::CHEST, BlockMeta::new(4))
            .unwrap();
        world
            .set_block(
                WorldPosition::new(0, 64, -1),
                BlockId::TRAPPED_CHEST,
                BlockMeta::new(4),
            )
            .unwrap();

        assert_eq!(world.find_matching_neighbor_xz(anchor, BlockId::CHEST), None);
    }
}
