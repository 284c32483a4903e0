use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path, sync::LazyLock};

pub mod logging;

pub use logging::LoggingConfig;

pub static WARDEN_CONFIG: LazyLock<WardenConfiguration> =
    LazyLock::new(WardenConfiguration::load);

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update. Just delete the old config and restart.",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(path, toml::to_string(&content).unwrap()) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}.",
                    path, err
                );
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

/// Runtime switches for the protection engine. Resolution semantics are
/// fixed; everything here only affects observability and host defaults.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfiguration {
    /// World name assumed when the host does not supply one.
    pub default_world: String,
    /// Log a debug line for every (role, position) pair a match resolves.
    pub match_diagnostics: bool,
    pub logging: LoggingConfig,
}

impl Default for WardenConfiguration {
    fn default() -> Self {
        Self {
            default_world: "world".to_string(),
            match_diagnostics: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl WardenConfiguration {
    pub fn load() -> Self {
        <Self as LoadTomlConfiguration>::load()
    }
}

impl LoadTomlConfiguration for WardenConfiguration {
    fn get_path() -> &'static Path {
        Path::new("warden.toml")
    }

    fn validate(&self) {
        if self.default_world.is_empty() {
            warn!("default_world is empty; protection lookups without an explicit world will never match");
        }
    }
}
