//! Cart state holder: reducer + notifier + durable mirror.

use crate::error::CartError;
use crate::storage::KeyValueStore;

use super::action::CartAction;
use super::item::{CartLineItem, VehicleId};
use super::notice::{LogNotifier, Notice, Notifier};
use super::persist::{decode_items, encode_items};
use super::reducer::reduce;
use super::state::CartState;

/// Owns the current cart snapshot and mirrors it into `storage` under `key`.
///
/// Every dispatch writes the full item sequence before returning. If that write
/// fails the in-memory transition stands and the error is returned, so callers
/// always learn when the durable copy is behind.
pub struct CartStore<S: KeyValueStore> {
    state: CartState,
    storage: S,
    key: String,
    notifier: Box<dyn Notifier>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart persisted under `key`, notifying through the log only.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        Self::open_with_notifier(storage, key, Box::new(LogNotifier))
    }

    /// Open the cart persisted under `key`.
    ///
    /// Missing, unreadable or malformed data yields an empty cart; the problem
    /// is logged, not returned.
    pub fn open_with_notifier(
        storage: S,
        key: impl Into<String>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let key = key.into();
        let state = load_state(&storage, &key);
        Self {
            state,
            storage,
            key,
            notifier,
        }
    }

    /// Apply `action`, emit its notice, and persist the result.
    ///
    /// Items with a non-finite price are refused before any state change.
    pub fn dispatch(&mut self, action: CartAction) -> Result<Option<Notice>, CartError> {
        match &action {
            CartAction::AddItem(item) => item.check_price()?,
            CartAction::LoadCart(items) => {
                items.iter().try_for_each(CartLineItem::check_price)?
            }
            _ => {}
        }
        let name = action.name();
        let transition = reduce(&self.state, action);
        self.state = transition.state;
        tracing::debug!(
            action = name,
            items = self.state.item_count(),
            total = self.state.total(),
            "cart transition"
        );
        if let Some(notice) = &transition.notice {
            self.notifier.notify(notice);
        }
        self.flush()?;
        Ok(transition.notice)
    }

    pub fn add_item(&mut self, item: CartLineItem) -> Result<Option<Notice>, CartError> {
        self.dispatch(CartAction::AddItem(item))
    }

    pub fn remove_item(&mut self, id: VehicleId) -> Result<Option<Notice>, CartError> {
        self.dispatch(CartAction::RemoveItem { id })
    }

    /// Quantity zero or below removes the item.
    pub fn update_quantity(
        &mut self,
        id: VehicleId,
        quantity: i64,
    ) -> Result<Option<Notice>, CartError> {
        self.dispatch(CartAction::UpdateQuantity { id, quantity })
    }

    pub fn clear_cart(&mut self) -> Result<Option<Notice>, CartError> {
        self.dispatch(CartAction::ClearCart)
    }

    /// Empty the cart after a completed order, announcing the order instead of
    /// the clear.
    pub(crate) fn complete_order(&mut self) -> Result<Notice, CartError> {
        let notice = Notice::OrderPlaced {
            total: self.state.total(),
            item_count: self.state.item_count(),
        };
        self.state = reduce(&self.state, CartAction::ClearCart).state;
        self.notifier.notify(&notice);
        self.flush()?;
        Ok(notice)
    }

    /// Write the current item sequence to storage.
    pub fn flush(&mut self) -> Result<(), CartError> {
        let raw = encode_items(self.state.items())?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    /// Re-read the persisted cart, replacing in-memory state.
    ///
    /// The store only hydrates by itself once, at open; this is the explicit
    /// resync when another process may have written the same key.
    pub fn reload(&mut self) {
        let items = load_state(&self.storage, &self.key).into_items();
        self.state = reduce(&self.state, CartAction::LoadCart(items)).state;
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    pub fn total(&self) -> f64 {
        self.state.total()
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count()
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.state.contains(id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn load_state<S: KeyValueStore>(storage: &S, key: &str) -> CartState {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CartState::new(),
        Err(e) => {
            tracing::warn!(key, "could not read persisted cart, starting empty: {}", e);
            return CartState::new();
        }
    };
    match decode_items(&raw) {
        Ok(items) => {
            let state = reduce(&CartState::new(), CartAction::LoadCart(items)).state;
            tracing::debug!(key, items = state.item_count(), "restored cart");
            state
        }
        Err(e) => {
            tracing::warn!(key, "discarding malformed persisted cart: {}", e);
            CartState::new()
        }
    }
}
