//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "partychat.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub dump: DumpConfig,
}

impl Config {
    /// Load configuration from `partychat.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Emit ANSI colours.
    #[serde(default = "default_true")]
    pub colors: bool,
    /// Swallow console write failures instead of returning them.
    #[serde(default)]
    pub ignore_errors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            colors: true,
            ignore_errors: false,
        }
    }
}

/// Packet transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Server address (`host:port`). Empty means encode only.
    #[serde(default)]
    pub address: String,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// Hex dump settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DumpConfig {
    /// Print a hex dump of every encoded packet.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}
fn default_connect_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[console]\nignore_errors = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.console.ignore_errors);
        assert!(config.console.colors);
        assert_eq!(config.network.connect_timeout_secs, 5);
        assert!(config.dump.enabled);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[network]\nconnect_timeout_secs = \"soon\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
