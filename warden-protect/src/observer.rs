use warden_config::WardenConfiguration;
use warden_core::math::position::WorldPosition;

use crate::group::BlockRole;

/// Receives every `(role, position)` pair of a resolved group. Purely
/// observational; implementations must not influence resolution.
pub trait MatchObserver {
    fn observe(&self, role: BlockRole, position: WorldPosition);
}

/// Logs each pair at debug level.
pub struct LogObserver;

impl LogObserver {
    /// Wired from `warden.toml`; `None` when match diagnostics are off.
    pub fn from_config(config: &WardenConfiguration) -> Option<Self> {
        config.match_diagnostics.then_some(Self)
    }
}

impl MatchObserver for LogObserver {
    fn observe(&self, role: BlockRole, position: WorldPosition) {
        log::debug!("{role} => {position}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_toggle_controls_the_observer() {
        let mut config = WardenConfiguration::default();
        assert!(LogObserver::from_config(&config).is_some());

        config.match_diagnostics = false;
        assert!(LogObserver::from_config(&config).is_none());
    }
}
