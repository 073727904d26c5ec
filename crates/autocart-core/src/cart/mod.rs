//! Shopping cart for vehicles.
//!
//! The cart is a pure reducer over immutable [`CartState`] snapshots plus a
//! [`CartStore`] that holds the current snapshot, forwards [`Notice`]s to a
//! [`Notifier`] and mirrors the item sequence into a
//! [`KeyValueStore`](crate::storage::KeyValueStore):
//! - one line item per vehicle id; re-adding replaces in place
//! - `total` and `item_count` are derived, never stored independently
//! - the persisted form is a JSON array written after every transition

mod action;
mod item;
mod notice;
mod persist;
mod reducer;
mod state;
mod store;

pub use action::CartAction;
pub use item::{CartLineItem, VehicleId};
pub use notice::{LogNotifier, Notice, NoticeLevel, Notifier};
pub use persist::{decode_items, encode_items, DEFAULT_CART_KEY};
pub use reducer::{reduce, Transition};
pub use state::CartState;
pub use store::CartStore;
