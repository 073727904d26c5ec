//! Cart line item: one vehicle held for purchase.

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Vehicle identifier, matching the vehicle record on the backend.
pub type VehicleId = i64;

/// One vehicle entry in the cart, keyed by `id`.
///
/// Vehicles are unique units, so re-adding an id replaces the entry instead of
/// incrementing `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: VehicleId,
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image path shown next to the item.
    pub path: String,
    pub year: i32,
    pub color: String,
    /// Odometer reading.
    pub mileage: i64,
    /// Defaults to 1 when absent from persisted data.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

pub(crate) fn default_quantity() -> u32 {
    1
}

impl CartLineItem {
    /// New line item with quantity 1 and empty image path, year, color and mileage.
    pub fn new(id: VehicleId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            path: String::new(),
            year: 0,
            color: String::new(),
            mileage: 0,
            quantity: default_quantity(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_mileage(mut self, mileage: i64) -> Self {
        self.mileage = mileage;
        self
    }

    /// Reject prices the persisted JSON cannot hold; serde_json would write
    /// them as `null` and the whole cart would fail to load.
    pub fn check_price(&self) -> Result<(), CartError> {
        if self.price.is_finite() {
            Ok(())
        } else {
            Err(CartError::InvalidPrice {
                id: self.id,
                price: self.price,
            })
        }
    }

    /// Price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
