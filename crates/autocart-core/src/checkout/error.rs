//! Checkout error type.

use thiserror::Error;

use crate::error::CartError;

/// Why a checkout was refused. Payment processing itself never fails.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to buy.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more card fields were left blank; nothing was processed.
    #[error("preencha todos os campos do cartão: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The order went through but the emptied cart could not be persisted.
    #[error(transparent)]
    Cart(#[from] CartError),
}
