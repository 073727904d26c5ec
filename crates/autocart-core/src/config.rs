use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cart::DEFAULT_CART_KEY;
use crate::storage::FileStore;

/// Global configuration loaded from `~/.config/autocart/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key the cart is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Simulated payment processing time in milliseconds.
    #[serde(default = "default_checkout_delay_ms")]
    pub checkout_delay_ms: u64,
    /// Directory for the file store; defaults to the XDG state dir.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_checkout_delay_ms() -> u64 {
    2000
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            checkout_delay_ms: default_checkout_delay_ms(),
            state_dir: None,
        }
    }
}

impl CartConfig {
    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// File store at `state_dir`, or the default XDG location.
    pub fn file_store(&self) -> Result<FileStore> {
        match &self.state_dir {
            Some(dir) => Ok(FileStore::new(dir)),
            None => FileStore::open_default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("autocart")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CartConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CartConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CartConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
