//! `autocart quantity <id> <n>` – set a vehicle's quantity (0 or less removes it).

use anyhow::Result;
use autocart_core::cart::CartStore;
use autocart_core::storage::KeyValueStore;

pub fn run_quantity<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: i64,
    quantity: i64,
) -> Result<()> {
    let was_present = store.contains(id);
    store.update_quantity(id, quantity)?;
    if !was_present {
        println!("Vehicle {id} is not in the cart");
    } else if quantity > 0 {
        println!("Vehicle {id} quantity set to {quantity}");
    }
    Ok(())
}
