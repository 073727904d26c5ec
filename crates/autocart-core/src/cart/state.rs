//! Aggregate cart snapshot with derived total and item count.

use super::item::{CartLineItem, VehicleId};

/// Immutable view of the cart.
///
/// `total` and `item_count` are always recomputed from `items`; there is no way
/// to set them directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartLineItem>,
    total: f64,
    item_count: usize,
}

impl CartState {
    /// Empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from an item sequence, collapsing repeated ids.
    ///
    /// A repeated id keeps the position of its first occurrence and the contents
    /// of its last, matching what a sequence of adds would produce.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut unique: Vec<CartLineItem> = Vec::with_capacity(items.len());
        for item in items {
            match unique.iter_mut().find(|existing| existing.id == item.id) {
                Some(slot) => *slot = item,
                None => unique.push(item),
            }
        }
        Self::recomputed(unique)
    }

    /// Wrap an already deduplicated sequence and derive totals.
    pub(super) fn recomputed(items: Vec<CartLineItem>) -> Self {
        let total = items.iter().map(CartLineItem::line_total).sum();
        let item_count = items.len();
        Self {
            items,
            total,
            item_count,
        }
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Σ(price × quantity).
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of distinct line items, not summed quantities.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: VehicleId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.get(id).is_some()
    }

    pub(super) fn position(&self, id: VehicleId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub(super) fn into_items(self) -> Vec<CartLineItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_items_derives_total_and_count() {
        let state = CartState::from_items(vec![
            CartLineItem::new(1, "Gol", 50_000.0),
            CartLineItem::new(2, "Corolla", 70_000.0),
        ]);
        assert_eq!(state.total(), 120_000.0);
        assert_eq!(state.item_count(), 2);
    }

    #[test]
    fn from_items_collapses_repeated_ids_keeping_first_position() {
        let state = CartState::from_items(vec![
            CartLineItem::new(1, "Gol", 50_000.0),
            CartLineItem::new(2, "Corolla", 70_000.0),
            CartLineItem::new(1, "Gol GTI", 65_000.0),
        ]);
        let ids: Vec<_> = state.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(state.items()[0].name, "Gol GTI");
        assert_eq!(state.total(), 135_000.0);
        assert_eq!(state.item_count(), 2);
    }

    #[test]
    fn item_count_ignores_quantity() {
        let mut item = CartLineItem::new(3, "Hilux", 200_000.0);
        item.quantity = 2;
        let state = CartState::from_items(vec![item]);
        assert_eq!(state.item_count(), 1);
        assert_eq!(state.total(), 400_000.0);
    }
}
