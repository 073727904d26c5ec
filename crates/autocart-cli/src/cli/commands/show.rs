//! `autocart show` – list cart contents.

use autocart_core::cart::CartStore;
use autocart_core::format::format_brl;
use autocart_core::storage::KeyValueStore;

pub fn run_show<S: KeyValueStore>(store: &CartStore<S>) {
    if store.items().is_empty() {
        println!("Cart '{}' is empty.", store.key());
        return;
    }
    println!("Cart '{}'", store.key());
    println!(
        "{:<6} {:<24} {:<6} {:<10} {:<10} {:<4} {}",
        "ID", "NAME", "YEAR", "COLOR", "KM", "QTY", "PRICE"
    );
    for item in store.items() {
        println!(
            "{:<6} {:<24} {:<6} {:<10} {:<10} {:<4} {}",
            item.id,
            item.name,
            item.year,
            item.color,
            item.mileage,
            item.quantity,
            format_brl(item.price)
        );
    }
    let noun = if store.item_count() == 1 { "veículo" } else { "veículos" };
    println!(
        "\n{} {}  total {}",
        store.item_count(),
        noun,
        format_brl(store.total())
    );
}
