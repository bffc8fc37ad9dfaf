//! Session key-value store.
//!
//! The web framework owns the session; this crate only needs string get, set
//! and delete-and-return on keys it derives. `MemorySession` is a map-backed
//! store that can be snapshotted to JSON.

mod memory;
mod persist;

pub use memory::MemorySession;
pub use persist::PersistedSession;

/// Per-client session storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);

    /// Remove `key`, returning the value it held.
    fn delete(&mut self, key: &str) -> Option<String>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Option<String> {
        (**self).delete(key)
    }
}
