//! `autocart add <id> <name> <price>` – add a vehicle to the cart.

use anyhow::Result;
use autocart_core::cart::{CartLineItem, CartStore};
use autocart_core::storage::KeyValueStore;
use clap::Args;

/// Vehicle fields for `add`.
#[derive(Debug, Clone, Args)]
pub struct VehicleArgs {
    /// Vehicle identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unit price.
    #[arg(value_parser = parse_price)]
    pub price: f64,
    /// Image path.
    #[arg(long, default_value = "")]
    pub path: String,
    /// Model year.
    #[arg(long, default_value_t = 0)]
    pub year: i32,
    #[arg(long, default_value = "")]
    pub color: String,
    /// Odometer reading.
    #[arg(long, default_value_t = 0)]
    pub mileage: i64,
}

/// Prices must be finite; NaN or infinity cannot be persisted.
pub fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|e| format!("invalid price {s:?}: {e}"))?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(format!("price must be a finite number, got {s:?}"))
    }
}

impl From<VehicleArgs> for CartLineItem {
    fn from(v: VehicleArgs) -> Self {
        CartLineItem::new(v.id, v.name, v.price)
            .with_path(v.path)
            .with_year(v.year)
            .with_color(v.color)
            .with_mileage(v.mileage)
    }
}

pub fn run_add<S: KeyValueStore>(store: &mut CartStore<S>, vehicle: VehicleArgs) -> Result<()> {
    store.add_item(vehicle.into())?;
    Ok(())
}
