//! Simulated checkout.
//!
//! There is no payment gateway: after the card fields pass a completeness
//! check, "processing" is a fixed delay that always succeeds. The cart is then
//! emptied and an order receipt is returned. The delay cannot be cancelled.

mod error;
mod payment;

pub use error::CheckoutError;
pub use payment::PaymentDetails;

use std::time::Duration;

use crate::cart::{CartLineItem, CartStore};
use crate::storage::KeyValueStore;

/// Default simulated processing time.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(2000);

/// Snapshot of what was bought.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub items: Vec<CartLineItem>,
    pub total: f64,
    pub item_count: usize,
    pub card_last4: String,
}

/// Checkout flow with a fixed simulated payment delay.
#[derive(Debug, Clone, Copy)]
pub struct Checkout {
    delay: Duration,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

impl Checkout {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validate, simulate payment, then empty the cart.
    ///
    /// Refusals (`EmptyCart`, `MissingFields`) leave the cart untouched.
    pub async fn submit<S: KeyValueStore>(
        &self,
        store: &mut CartStore<S>,
        details: &PaymentDetails,
    ) -> Result<Receipt, CheckoutError> {
        if store.state().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        details.validate()?;

        let receipt = Receipt {
            items: store.items().to_vec(),
            total: store.total(),
            item_count: store.item_count(),
            card_last4: details.last4(),
        };
        tracing::info!(
            items = receipt.item_count,
            total = receipt.total,
            delay_ms = self.delay.as_millis() as u64,
            "processing simulated payment"
        );
        tokio::time::sleep(self.delay).await;

        store.complete_order()?;
        tracing::info!(items = receipt.item_count, "order placed, cart emptied");
        Ok(receipt)
    }
}
