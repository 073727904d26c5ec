//! Pure cart reducer: `(state, action) -> (state, notice)`.

use super::action::CartAction;
use super::item::{default_quantity, CartLineItem, VehicleId};
use super::notice::Notice;
use super::state::CartState;

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CartState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn silent(state: CartState) -> Self {
        Self {
            state,
            notice: None,
        }
    }

    fn with_notice(state: CartState, notice: Notice) -> Self {
        Self {
            state,
            notice: Some(notice),
        }
    }
}

/// Apply `action` to `state` and return the next snapshot.
///
/// `state` is never modified; unchanged transitions return an equal clone.
pub fn reduce(state: &CartState, action: CartAction) -> Transition {
    match action {
        CartAction::AddItem(item) => add_item(state, item),
        CartAction::RemoveItem { id } => remove_item(state, id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, id, quantity),
        CartAction::ClearCart => clear_cart(state),
        CartAction::LoadCart(items) => Transition::silent(CartState::from_items(items)),
    }
}

fn add_item(state: &CartState, mut item: CartLineItem) -> Transition {
    item.quantity = default_quantity();
    let name = item.name.clone();
    let mut items = state.items().to_vec();
    match state.position(item.id) {
        Some(idx) => {
            items[idx] = item;
            Transition::with_notice(CartState::recomputed(items), Notice::Duplicate { name })
        }
        None => {
            items.push(item);
            Transition::with_notice(CartState::recomputed(items), Notice::Added { name })
        }
    }
}

fn remove_item(state: &CartState, id: VehicleId) -> Transition {
    let Some(idx) = state.position(id) else {
        return Transition::silent(state.clone());
    };
    let mut items = state.items().to_vec();
    let removed = items.remove(idx);
    Transition::with_notice(
        CartState::recomputed(items),
        Notice::Removed { name: removed.name },
    )
}

/// Quantities above `u32::MAX` saturate to `u32::MAX`.
fn update_quantity(state: &CartState, id: VehicleId, quantity: i64) -> Transition {
    if quantity <= 0 {
        return remove_item(state, id);
    }
    let Some(idx) = state.position(id) else {
        return Transition::silent(state.clone());
    };
    let mut items = state.items().to_vec();
    items[idx].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    Transition::silent(CartState::recomputed(items))
}

fn clear_cart(state: &CartState) -> Transition {
    if state.is_empty() {
        return Transition::silent(CartState::new());
    }
    Transition::with_notice(
        CartState::new(),
        Notice::Cleared {
            count: state.item_count(),
        },
    )
}
