//! Actions dispatched to the cart reducer.

use super::item::{CartLineItem, VehicleId};

/// A single cart transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a vehicle, replacing any entry with the same id.
    AddItem(CartLineItem),
    /// Remove the entry with this id, if present.
    RemoveItem { id: VehicleId },
    /// Set the quantity of an entry; zero or negative removes it.
    /// Values above `u32::MAX` are stored as `u32::MAX`.
    UpdateQuantity { id: VehicleId, quantity: i64 },
    /// Remove every entry.
    ClearCart,
    /// Replace the whole sequence with rehydrated items. Silent.
    LoadCart(Vec<CartLineItem>),
}

impl CartAction {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem { .. } => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ClearCart => "clear_cart",
            CartAction::LoadCart(_) => "load_cart",
        }
    }
}
