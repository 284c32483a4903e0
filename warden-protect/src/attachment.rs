use warden_world::block::{BlockDirection, BlockId};

/// Wall-mounted families whose metadata encodes which face they hang on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallMount {
    Sign,
    LeverOrButton,
    Trapdoor,
}

impl WallMount {
    pub fn of(id: BlockId) -> Option<Self> {
        if id == BlockId::WALL_SIGN {
            Some(Self::Sign)
        } else if id == BlockId::LEVER || id.is_button() {
            Some(Self::LeverOrButton)
        } else if id == BlockId::TRAPDOOR {
            Some(Self::Trapdoor)
        } else {
            None
        }
    }
}

/// Ground levers reuse the wall direction bits, so both patterns have to be
/// tested: 0x6 & 0x2 == 0x2 would otherwise read as a west attachment.
pub fn is_ground_lever(data: u8) -> bool {
    (data & 0x5) == 0x5 || (data & 0x6) == 0x6
}

/// Bit pattern the neighbor's metadata must carry, under mask-equality, for
/// the neighbor to count as attached toward the anchor. `direction` points
/// from the anchor to the neighbor. Vertical faces never qualify.
fn expected_pattern(mount: WallMount, direction: BlockDirection) -> Option<u8> {
    use warden_world::block::BlockDirection::{East, North, South, West};

    let code = match mount {
        WallMount::Sign => match direction {
            East => 0x05,
            West => 0x04,
            South => 0x03,
            North => 0x02,
            _ => return None,
        },
        WallMount::LeverOrButton => match direction {
            East => 0x1,
            West => 0x2,
            South => 0x3,
            North => 0x4,
            _ => return None,
        },
        // Trapdoor metadata stores the face the door opens away from, not
        // the wall it hangs on, so this table reads through the opposite
        // face. The rotated legacy codes are kept exactly as stored.
        WallMount::Trapdoor => match direction {
            West => 0x2,  // stored EAST
            East => 0x3,  // stored WEST
            North => 0x0, // stored SOUTH
            South => 0x1, // stored NORTH
            _ => return None,
        },
    };

    Some(code)
}

pub fn matches(mount: WallMount, direction: BlockDirection, data: u8) -> bool {
    match expected_pattern(mount, direction) {
        Some(code) => (data & code) == code,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_world::block::BlockDirection::{Down, East, North, South, Up, West};

    #[test]
    fn ground_lever_patterns() {
        for data in [0x5, 0x6, 0x7, 0xd, 0xe] {
            assert!(is_ground_lever(data), "{data:#x} should be ground-mounted");
        }
        for data in [0x1, 0x2, 0x3, 0x4, 0x8, 0xc] {
            assert!(!is_ground_lever(data), "{data:#x} should be wall-mounted");
        }
    }

    #[test]
    fn sign_codes_point_back_at_the_anchor() {
        assert!(matches(WallMount::Sign, East, 0x05));
        assert!(matches(WallMount::Sign, West, 0x04));
        assert!(matches(WallMount::Sign, South, 0x03));
        assert!(matches(WallMount::Sign, North, 0x02));

        assert!(!matches(WallMount::Sign, East, 0x02));
        assert!(!matches(WallMount::Sign, North, 0x05));
    }

    #[test]
    fn lever_and_button_codes_point_back_at_the_anchor() {
        assert!(matches(WallMount::LeverOrButton, East, 0x1));
        assert!(matches(WallMount::LeverOrButton, West, 0x2));
        assert!(matches(WallMount::LeverOrButton, South, 0x3));
        assert!(matches(WallMount::LeverOrButton, North, 0x4));

        assert!(!matches(WallMount::LeverOrButton, East, 0x2));
        assert!(!matches(WallMount::LeverOrButton, South, 0x1));
    }

    #[test]
    fn trapdoor_codes_read_through_the_opposite_face() {
        // a trapdoor west of the anchor carries the EAST code
        assert!(matches(WallMount::Trapdoor, West, 0x2));
        assert!(!matches(WallMount::Trapdoor, East, 0x2));

        assert!(matches(WallMount::Trapdoor, East, 0x3));
        assert!(matches(WallMount::Trapdoor, South, 0x1));
        assert!(!matches(WallMount::Trapdoor, South, 0x2));

        // stored SOUTH is 0x0, so the masked check for a north neighbor is
        // satisfied by any metadata
        assert!(matches(WallMount::Trapdoor, North, 0x0));
        assert!(matches(WallMount::Trapdoor, North, 0x7));
    }

    #[test]
    fn vertical_faces_never_qualify() {
        for mount in [WallMount::Sign, WallMount::LeverOrButton, WallMount::Trapdoor] {
            assert!(!matches(mount, Up, 0xf));
            assert!(!matches(mount, Down, 0xf));
        }
    }

    #[test]
    fn mount_classification_is_closed() {
        assert_eq!(WallMount::of(BlockId::WALL_SIGN), Some(WallMount::Sign));
        assert_eq!(WallMount::of(BlockId::LEVER), Some(WallMount::LeverOrButton));
        assert_eq!(
            WallMount::of(BlockId::STONE_BUTTON),
            Some(WallMount::LeverOrButton)
        );
        assert_eq!(
            WallMount::of(BlockId::WOOD_BUTTON),
            Some(WallMount::LeverOrButton)
        );
        assert_eq!(WallMount::of(BlockId::TRAPDOOR), Some(WallMount::Trapdoor));
        assert_eq!(WallMount::of(BlockId::CHEST), None);
        assert_eq!(WallMount::of(BlockId::SIGN_POST), None);
    }
}
