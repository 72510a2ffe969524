use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");
const EXAMPLE_ACCOUNT: &str = "\"0x1234567890abcdef\"";

/// Example config text, with the sample wallet replaced by `account` when given.
///
/// The result is parsed back before it is returned so a bad account value
/// never reaches disk.
pub fn render_config(account: Option<&str>) -> Result<String> {
    let content = match account {
        Some(account) => {
            let quoted = serde_json::to_string(account).context("Failed to quote account")?;
            EXAMPLE_CONFIG.replacen(EXAMPLE_ACCOUNT, &quoted, 1)
        }
        None => EXAMPLE_CONFIG.to_string(),
    };

    let config: AppConfig =
        serde_yaml::from_str(&content).context("Generated configuration is not valid YAML")?;
    if let Some(account) = account {
        anyhow::ensure!(
            config.wallet.account.as_deref() == Some(account),
            "Account {account:?} could not be written to the configuration"
        );
    }
    Ok(content)
}

/// Creates the configuration file at the default location
pub fn setup(account: Option<&str>) -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(path, account)
}

/// Creates the configuration file at `path`, refusing to overwrite an existing one
pub fn setup_at_path<P: AsRef<Path>>(path: P, account: Option<&str>) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    let content = render_config(account)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
