//! CLI command handlers. Each command is in its own file.

mod add;
mod checkout;
mod clear;
mod quantity;
mod remove;
mod show;

pub use add::{run_add, VehicleArgs};
pub use checkout::run_checkout;
pub use clear::run_clear;
pub use quantity::run_quantity;
pub use remove::run_remove;
pub use show::run_show;

use anyhow::Result;
use autocart_core::cart::{CartStore, Notice};
use autocart_core::config::CartConfig;
use autocart_core::storage::FileStore;

/// Cart store backed by the configured state directory, printing notices to stdout.
pub fn open_store(cfg: &CartConfig, key: &str) -> Result<CartStore<FileStore>> {
    let storage = cfg.file_store()?;
    tracing::debug!(dir = %storage.dir().display(), key, "opening cart");
    Ok(CartStore::open_with_notifier(
        storage,
        key,
        Box::new(|notice: &Notice| {
            tracing::info!(kind = ?notice.level(), "{}", notice.message());
            println!("{}", notice.message());
        }),
    ))
}
