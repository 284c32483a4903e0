use serde::{Deserialize, Serialize};

/// Legacy numeric material id, as stored in the world format.
// 0 is air -> reasonable default
#[derive(Default, Serialize, Deserialize, Debug, Hash, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct BlockId {
    data: u16,
}

impl BlockId {
    pub const AIR: Self = Self::from_id(0);
    pub const CHEST: Self = Self::from_id(54);
    pub const SIGN_POST: Self = Self::from_id(63);
    pub const WOODEN_DOOR: Self = Self::from_id(64);
    pub const WALL_SIGN: Self = Self::from_id(68);
    pub const LEVER: Self = Self::from_id(69);
    pub const IRON_DOOR: Self = Self::from_id(71);
    pub const STONE_BUTTON: Self = Self::from_id(77);
    pub const TRAPDOOR: Self = Self::from_id(96);
    pub const WOOD_BUTTON: Self = Self::from_id(143);
    pub const TRAPPED_CHEST: Self = Self::from_id(146);

    pub const fn from_id(id: u16) -> Self {
        Self { data: id }
    }

    pub fn get_id(&self) -> u16 {
        self.data
    }

    pub fn is_air(&self) -> bool {
        self.data == 0
    }

    /// Containers that merge with a same-type horizontal neighbor.
    pub fn is_double_container(&self) -> bool {
        matches!(self.data, 54 | 146)
    }

    /// Doors occupy two stacked cells.
    pub fn is_door(&self) -> bool {
        matches!(self.data, 64 | 71)
    }

    pub fn is_button(&self) -> bool {
        matches!(self.data, 77 | 143)
    }
}
