use crate::core::token::ConversionMode;
use crate::core::wallet::WalletConnection;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WalletConfig {
    pub account: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SettlementConfig {
    #[serde(default = "SettlementConfig::default_latency_ms")]
    pub latency_ms: u64,
}

impl SettlementConfig {
    fn default_latency_ms() -> u64 {
        1000
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        SettlementConfig {
            latency_ms: Self::default_latency_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub mode: ConversionMode,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub settlement: SettlementConfig,
}

impl AppConfig {
    /// Loads the default config file, falling back to defaults when none exists yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "lconv", "lconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Wallet state, with `account_override` taking precedence over the file.
    pub fn wallet(&self, account_override: Option<&str>) -> WalletConnection {
        match account_override.or(self.wallet.account.as_deref()) {
            Some(account) => WalletConnection::connected(account),
            None => WalletConnection::disconnected(),
        }
    }
}
