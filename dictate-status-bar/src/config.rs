// SPDX-License-Identifier: GPL-3.0-only
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use dictate_status_client::protocol::DEFAULT_SOCKET_PATH;

/// Environment variable naming an alternate config file location.
pub const CONFIG_PATH_ENV: &str = "DICTATE_CONFIG";

/// The daemon's own config file, reread here so bar and daemon agree on the
/// socket without a second file. Only the keys the bar needs are modeled;
/// everything else in the file is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub daemon: DaemonSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DaemonSection {
    pub socket: Option<PathBuf>,
}

impl BarConfig {
    /// Config file path: `$DICTATE_CONFIG` when set, otherwise
    /// `~/.config/dictate/config.toml`.
    fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".config")
            })
            .join("dictate");

        config_dir.join("config.toml")
    }

    /// Load configuration from disk
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(content) => match toml::from_str::<BarConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {e}. Using defaults.",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                debug!(
                    "Config file {} not found or unreadable: {e}. Using defaults.",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Effective socket path: CLI override first, then the config file, then
    /// the built-in default.
    #[must_use]
    pub fn socket_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.daemon.socket.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
    }
}
