//! CLI for the autocart vehicle cart.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use autocart_core::config;

use commands::{
    open_store, run_add, run_checkout, run_clear, run_quantity, run_remove, run_show, VehicleArgs,
};

/// Top-level CLI for the autocart vehicle cart.
#[derive(Debug, Parser)]
#[command(name = "autocart")]
#[command(about = "autocart: vehicle shopping cart with simulated checkout", long_about = None)]
pub struct Cli {
    /// Storage key to use instead of the configured one.
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a vehicle to the cart (replaces it if already present).
    Add(VehicleArgs),

    /// Remove a vehicle by its ID.
    Remove {
        /// Vehicle identifier.
        id: i64,
    },

    /// Set the quantity of a vehicle; 0 or less removes it.
    Quantity {
        /// Vehicle identifier.
        id: i64,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove every vehicle from the cart.
    Clear,

    /// Show cart contents, total and item count.
    Show,

    /// Pay for the cart (simulated) and empty it.
    Checkout {
        #[arg(long)]
        card_number: String,
        #[arg(long)]
        card_holder: String,
        /// Expiry as MM/AA.
        #[arg(long)]
        expiry: String,
        #[arg(long)]
        cvv: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let key = cli.key.unwrap_or_else(|| cfg.storage_key.clone());
        let mut store = open_store(&cfg, &key)?;

        match cli.command {
            CliCommand::Add(vehicle) => run_add(&mut store, vehicle)?,
            CliCommand::Remove { id } => run_remove(&mut store, id)?,
            CliCommand::Quantity { id, quantity } => run_quantity(&mut store, id, quantity)?,
            CliCommand::Clear => run_clear(&mut store)?,
            CliCommand::Show => run_show(&store),
            CliCommand::Checkout {
                card_number,
                card_holder,
                expiry,
                cvv,
            } => {
                let details = autocart_core::checkout::PaymentDetails {
                    card_number,
                    card_holder,
                    expiry,
                    cvv,
                };
                run_checkout(&mut store, &details, cfg.checkout_delay()).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
