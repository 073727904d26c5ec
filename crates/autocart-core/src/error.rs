//! Error type for cart persistence.

use thiserror::Error;

/// Errors surfaced by the cart store and its persisted format.
///
/// Reducer transitions themselves never fail; only the durable mirror can.
#[derive(Debug, Error)]
pub enum CartError {
    /// The key-value backend failed to read or write the cart key.
    #[error("cart storage: {0}")]
    Storage(#[from] std::io::Error),

    /// The item sequence could not be serialized.
    #[error("encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// A price that JSON cannot represent (NaN or infinite).
    #[error("vehicle {id}: price must be a finite number, got {price}")]
    InvalidPrice { id: i64, price: f64 },

    /// The persisted value is not a valid cart item array.
    #[error("decode cart: {0}")]
    Decode(#[source] serde_json::Error),
}
