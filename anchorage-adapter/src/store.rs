use alloc::string::String;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type RawMap = HashMap<String, String>;
#[cfg(not(feature = "std"))]
type RawMap = BTreeMap<String, String>;

/// Raw string storage a [`JsonStore`] sits on top of.
///
/// A DOM host backs this with `localStorage`; tests and simulators use
/// [`MemoryStore`].
pub trait StoreBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, raw: String);
    fn delete(&mut self, key: &str);
}

/// A string-keyed store for JSON-serializable values.
///
/// Malformed or absent stored data resolves to `None` (logged, never
/// propagated to the UI layer). An unserializable value is skipped the same
/// way on write.
#[derive(Clone, Debug, Default)]
pub struct JsonStore<B> {
    backend: B,
}

impl<B: StoreBackend> JsonStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.read(key)?;
        serde_json::from_str(&raw)
            .inspect_err(|err| awarn!(key, %err, "store: malformed value, resolving to None"))
            .ok()
    }

    /// Returns `false` when the value could not be serialized (nothing is
    /// written in that case).
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value)
            .inspect_err(|err| awarn!(key, %err, "store: unserializable value, skipping write"))
        {
            Ok(raw) => {
                self.backend.write(key, raw);
                true
            }
            Err(_) => false,
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.backend.delete(key);
    }
}

/// An in-memory [`StoreBackend`] for tests and host simulators.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: RawMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoreBackend for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, raw: String) {
        self.entries.insert(String::from(key), raw);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
