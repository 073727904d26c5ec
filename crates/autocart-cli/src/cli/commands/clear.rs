//! `autocart clear` – empty the cart.

use anyhow::Result;
use autocart_core::cart::CartStore;
use autocart_core::storage::KeyValueStore;

pub fn run_clear<S: KeyValueStore>(store: &mut CartStore<S>) -> Result<()> {
    if store.clear_cart()?.is_none() {
        println!("Cart is already empty");
    }
    Ok(())
}
