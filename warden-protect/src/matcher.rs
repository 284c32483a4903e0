use warden_core::math::position::WorldPosition;
use warden_world::block::{BlockDirection, BlockId};
use warden_world::World;

use crate::attachment::{self, WallMount};
use crate::group::{BlockGroup, BlockRole};
use crate::observer::MatchObserver;
use crate::registry::{Protection, ProtectionRegistry, RegistryError};

/// How an anchor's own block type participates in a structure. The generic
/// vertical/wall rules only apply to `Standalone` anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StructureKind {
    DoubleContainer,
    Door,
    Standalone,
}

fn classify(id: BlockId) -> StructureKind {
    if id.is_double_container() {
        StructureKind::DoubleContainer
    } else if id.is_door() {
        StructureKind::Door
    } else {
        StructureKind::Standalone
    }
}

/// Resolves the set of world positions forming one protectable structure
/// around an anchor block.
pub trait ProtectionMatcher {
    /// Never fails: an anchor with no attached structure resolves to a
    /// group holding just itself.
    fn resolve_group(&self, anchor: WorldPosition) -> BlockGroup;

    /// Resolves the group and asks the registry whether any member is
    /// already covered by a stored protection.
    fn match_protection(
        &self,
        registry: &dyn ProtectionRegistry,
        anchor: WorldPosition,
    ) -> Result<ProtectionMatch, RegistryError>;
}

pub struct ProtectionMatch {
    pub group: BlockGroup,
    pub protection: Option<Protection>,
}

pub struct SimpleProtectionMatcher<'w, W: World> {
    world: &'w W,
    observer: Option<Box<dyn MatchObserver>>,
}

impl<'w, W: World> SimpleProtectionMatcher<'w, W> {
    pub fn new(world: &'w W) -> Self {
        Self {
            world,
            observer: None,
        }
    }

    pub fn with_observer(world: &'w W, observer: Box<dyn MatchObserver>) -> Self {
        Self {
            world,
            observer: Some(observer),
        }
    }

    /// Doors occupy two stacked cells; the other half is whichever vertical
    /// neighbor is also a door. Orientation bits are not consulted.
    fn other_door_half(&self, anchor: WorldPosition) -> Option<WorldPosition> {
        let above = self.world.relative(anchor, BlockDirection::Up);
        if self.world.block_id_at(above).is_some_and(|id| id.is_door()) {
            return Some(above);
        }
        let below = self.world.relative(anchor, BlockDirection::Down);
        if self.world.block_id_at(below).is_some_and(|id| id.is_door()) {
            return Some(below);
        }
        None
    }

    fn resolve_standalone(&self, group: &mut BlockGroup, anchor: WorldPosition) {
        let above = self.world.relative(anchor, BlockDirection::Up);

        match self.world.block_id_at(above) {
            // a door resting on the anchor is itself a two-cell structure
            Some(id) if id.is_door() => {
                group.add(BlockRole::DoorAbove, above);
                group.add(
                    BlockRole::DoorTop,
                    self.world.relative(above, BlockDirection::Up),
                );
            }
            // only a ground-mounted lever depends on the block below it
            Some(id)
                if id == BlockId::LEVER
                    && self
                        .world
                        .meta_at(above)
                        .is_some_and(|meta| attachment::is_ground_lever(meta.raw())) =>
            {
                group.add(BlockRole::AttachedLever, above);
            }
            // sign posts stand on their support and break with it
            Some(id) if id == BlockId::SIGN_POST => {
                group.add(BlockRole::AttachedSignPost, above);
            }
            _ => self.scan_walls(group, anchor),
        }
    }

    /// Scans the four horizontal neighbors in fixed order for a wall-mounted
    /// block attached to the anchor. The first qualifying neighbor wins and
    /// the scan stops; at most one wall direction ever joins the group.
    fn scan_walls(&self, group: &mut BlockGroup, anchor: WorldPosition) {
        for direction in BlockDirection::HORIZONTAL {
            let neighbor = self.world.relative(anchor, direction);
            let Some(id) = self.world.block_id_at(neighbor) else {
                continue;
            };
            let Some(mount) = WallMount::of(id) else {
                continue;
            };
            let Some(meta) = self.world.meta_at(neighbor) else {
                continue;
            };
            let data = meta.raw();

            // a ground lever's bits collide with the wall codes and must
            // never be read as a wall attachment, so the whole scan stops
            if id == BlockId::LEVER && attachment::is_ground_lever(data) {
                return;
            }

            if attachment::matches(mount, direction, data) {
                group.add(BlockRole::AttachedWall, neighbor);
                return;
            }
        }
    }
}

impl<W: World> ProtectionMatcher for SimpleProtectionMatcher<'_, W> {
    fn resolve_group(&self, anchor: WorldPosition) -> BlockGroup {
        // the anchor must be on the protection if anything matches
        let mut group = BlockGroup::new(anchor);

        let Some(anchor_id) = self.world.block_id_at(anchor) else {
            return group;
        };

        match classify(anchor_id) {
            StructureKind::DoubleContainer => {
                if let Some(pair) = self.world.find_matching_neighbor_xz(anchor, anchor_id) {
                    group.add(BlockRole::PairedHalf, pair);
                }
            }
            StructureKind::Door => {
                if let Some(other) = self.other_door_half(anchor) {
                    group.add(BlockRole::OtherDoorHalf, other);
                }
            }
            StructureKind::Standalone => self.resolve_standalone(&mut group, anchor),
        }

        group
    }

    fn match_protection(
        &self,
        registry: &dyn ProtectionRegistry,
        anchor: WorldPosition,
    ) -> Result<ProtectionMatch, RegistryError> {
        let group = self.resolve_group(anchor);

        if let Some(observer) = &self.observer {
            for &(role, position) in group.entries() {
                observer.observe(role, position);
            }
        }

        let members: Vec<WorldPosition> = group.positions().collect();
        let protection = registry.find(self.world.name(), &members)?;

        Ok(ProtectionMatch { group, protection })
    }
}
