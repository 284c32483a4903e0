use std::fmt;

use warden_core::math::position::WorldPosition;

/// Why a position belongs to a resolved structure. Roles exist for
/// diagnostics; protection semantics only care about the positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRole {
    Base,
    PairedHalf,
    OtherDoorHalf,
    DoorAbove,
    DoorTop,
    AttachedLever,
    AttachedSignPost,
    AttachedWall,
}

impl fmt::Display for BlockRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockRole::Base => "base",
            BlockRole::PairedHalf => "paired half",
            BlockRole::OtherDoorHalf => "other door half",
            BlockRole::DoorAbove => "door above",
            BlockRole::DoorTop => "door top",
            BlockRole::AttachedLever => "attached lever",
            BlockRole::AttachedSignPost => "attached sign post",
            BlockRole::AttachedWall => "attached wall block",
        })
    }
}

/// The members of one protectable structure. Created fresh per resolution,
/// never empty: the anchor is inserted on construction and stays first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockGroup {
    entries: Vec<(BlockRole, WorldPosition)>,
}

impl BlockGroup {
    pub fn new(anchor: WorldPosition) -> Self {
        Self {
            entries: vec![(BlockRole::Base, anchor)],
        }
    }

    /// Adds a member. A position already in the group keeps its first role.
    pub fn add(&mut self, role: BlockRole, position: WorldPosition) {
        if !self.contains(position) {
            self.entries.push((role, position));
        }
    }

    pub fn contains(&self, position: WorldPosition) -> bool {
        self.entries.iter().any(|&(_, member)| member == position)
    }

    pub fn anchor(&self) -> WorldPosition {
        self.entries[0].1
    }

    pub fn role_of(&self, position: WorldPosition) -> Option<BlockRole> {
        self.entries
            .iter()
            .find(|&&(_, member)| member == position)
            .map(|&(role, _)| role)
    }

    pub fn entries(&self) -> &[(BlockRole, WorldPosition)] {
        &self.entries
    }

    pub fn positions(&self) -> impl Iterator<Item = WorldPosition> + '_ {
        self.entries.iter().map(|&(_, position)| position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
