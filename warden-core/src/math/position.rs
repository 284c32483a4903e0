use super::vector3::Vector3;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Aka Block Position
pub struct WorldPosition(pub Vector3<i32>);

impl WorldPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Packs the position into the 26/12/26 bit layout shared with the
    /// legacy wire and storage formats.
    pub const fn to_packed(self) -> i64 {
        ((self.0.x as i64 & 0x3FF_FFFF) << 38)
            | ((self.0.z as i64 & 0x3FF_FFFF) << 12)
            | (self.0.y as i64 & 0xFFF)
    }

    pub const fn from_packed(packed: i64) -> Self {
        Self(Vector3::new(
            (packed >> 38) as i32,
            (packed << 52 >> 52) as i32,
            (packed << 26 >> 38) as i32,
        ))
    }
}

impl Serialize for WorldPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.to_packed())
    }
}

impl<'de> Deserialize<'de> for WorldPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = WorldPosition;
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("An i64 int")
            }
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(WorldPosition::from_packed(v))
            }
        }
        deserializer.deserialize_i64(Visitor)
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::WorldPosition;

    #[test]
    fn packed_layout_survives_negative_coordinates() {
        for pos in [
            WorldPosition::new(0, 0, 0),
            WorldPosition::new(100, 64, -100),
            WorldPosition::new(-30_000_000, -64, 29_999_999),
        ] {
            assert_eq!(WorldPosition::from_packed(pos.to_packed()), pos);
        }
    }
}
