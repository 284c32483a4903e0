pub mod attachment;
pub mod group;
pub mod matcher;
pub mod observer;
pub mod registry;

pub use group::{BlockGroup, BlockRole};
pub use matcher::{ProtectionMatch, ProtectionMatcher, SimpleProtectionMatcher};
pub use observer::{LogObserver, MatchObserver};
pub use registry::{MemoryProtectionRegistry, Protection, ProtectionRegistry, RegistryError};
