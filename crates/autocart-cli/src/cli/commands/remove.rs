//! `autocart remove <id>` – remove a vehicle from the cart.

use anyhow::Result;
use autocart_core::cart::CartStore;
use autocart_core::storage::KeyValueStore;

pub fn run_remove<S: KeyValueStore>(store: &mut CartStore<S>, id: i64) -> Result<()> {
    if store.remove_item(id)?.is_none() {
        println!("Vehicle {id} is not in the cart");
    }
    Ok(())
}
