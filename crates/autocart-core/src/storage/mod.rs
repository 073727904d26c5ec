//! Durable key-value backends for the persisted cart.
//!
//! The cart store only needs `get`/`set`/`remove` on string values, the same
//! contract a browser's local storage offers. `MemoryStore` keeps values in a
//! map; `FileStore` keeps one JSON file per key under the XDG state dir and
//! replaces it atomically (write `.part`, then rename).

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;

/// String key-value store holding the persisted cart.
pub trait KeyValueStore {
    /// Read the value for `key`; `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Write `value` under `key`. The value is durable once this returns.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Delete `key`; deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` (e.g. `cart.json` → `cart.json.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("cart.json"));
        assert_eq!(p.to_string_lossy(), "cart.json.part");
        let p2 = temp_path(Path::new("/tmp/state/cart.json"));
        assert_eq!(p2.to_string_lossy(), "/tmp/state/cart.json.part");
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
        store.remove("cart").unwrap();
        assert!(store.get("cart").unwrap().is_none());
    }
}
