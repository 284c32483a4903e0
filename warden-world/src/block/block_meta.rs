use serde::{Deserialize, Serialize};

/// Packed per-block metadata byte. What the bits mean depends entirely on
/// the block type: facing for containers, attachment direction for
/// wall-mounted blocks, open/half state for doors.
#[derive(Default, Serialize, Deserialize, Debug, Hash, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct BlockMeta {
    data: u8,
}

impl BlockMeta {
    pub const NONE: Self = Self::new(0);

    pub const fn new(data: u8) -> Self {
        Self { data }
    }

    pub fn raw(&self) -> u8 {
        self.data
    }
}
