use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use warden_core::math::position::WorldPosition;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Protection storage is unavailable: {0}")]
    Unavailable(String),
    #[error("A protection already covers {0}")]
    AlreadyProtected(WorldPosition),
}

/// A stored protection record: an id and the positions it covers in one
/// world. Ownership, policy and pricing live with the embedding host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protection {
    pub id: u32,
    pub world: String,
    pub positions: Vec<WorldPosition>,
}

/// Lookup and registration of protected coordinate sets. The matcher calls
/// `find` once per resolution; retry policy, if any, belongs behind this
/// trait, never in the matcher.
pub trait ProtectionRegistry {
    /// Returns a protection any of whose members appears in `positions`.
    fn find(
        &self,
        world: &str,
        positions: &[WorldPosition],
    ) -> Result<Option<Protection>, RegistryError>;

    fn exists(&self, world: &str, positions: &[WorldPosition]) -> Result<bool, RegistryError> {
        Ok(self.find(world, positions)?.is_some())
    }

    /// Promotes a resolved group into a stored protection.
    fn register(
        &self,
        world: &str,
        positions: &[WorldPosition],
    ) -> Result<Protection, RegistryError>;
}

/// Map-backed registry for hosts without external storage, and for tests.
#[derive(Default)]
pub struct MemoryProtectionRegistry {
    inner: Mutex<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    next_id: u32,
    protections: HashMap<u32, Protection>,
    by_world: HashMap<String, HashMap<WorldPosition, u32>>,
}

impl MemoryProtectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProtectionRegistry for MemoryProtectionRegistry {
    fn find(
        &self,
        world: &str,
        positions: &[WorldPosition],
    ) -> Result<Option<Protection>, RegistryError> {
        let inner = self.inner.lock();
        let Some(index) = inner.by_world.get(world) else {
            return Ok(None);
        };
        for position in positions {
            if let Some(id) = index.get(position) {
                return Ok(inner.protections.get(id).cloned());
            }
        }
        Ok(None)
    }

    fn register(
        &self,
        world: &str,
        positions: &[WorldPosition],
    ) -> Result<Protection, RegistryError> {
        let mut inner = self.inner.lock();

        if let Some(index) = inner.by_world.get(world) {
            if let Some(&taken) = positions.iter().find(|position| index.contains_key(*position)) {
                return Err(RegistryError::AlreadyProtected(taken));
            }
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let protection = Protection {
            id,
            world: world.to_string(),
            positions: positions.to_vec(),
        };

        inner.protections.insert(id, protection.clone());
        let index = inner.by_world.entry(world.to_string()).or_default();
        for &position in positions {
            index.insert(position, id);
        }

        Ok(protection)
    }
}
