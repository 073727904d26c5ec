//! `autocart checkout` – simulated payment, then empty the cart.

use anyhow::Result;
use autocart_core::cart::CartStore;
use autocart_core::checkout::{Checkout, PaymentDetails};
use autocart_core::format::format_brl;
use autocart_core::storage::KeyValueStore;
use std::time::Duration;

pub async fn run_checkout<S: KeyValueStore>(
    store: &mut CartStore<S>,
    details: &PaymentDetails,
    delay: Duration,
) -> Result<()> {
    let receipt = Checkout::new(delay).submit(store, details).await?;
    println!(
        "Order confirmed: {} vehicle(s), {} charged to card ending {}",
        receipt.item_count,
        format_brl(receipt.total),
        receipt.card_last4
    );
    Ok(())
}
