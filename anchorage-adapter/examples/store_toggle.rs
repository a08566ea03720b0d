// Example: the string-keyed JSON store collaborator, as a consumer page uses
// it: one persisted flag per key, absent/malformed data resolving to None.
use anchorage_adapter::{JsonStore, MemoryStore, StoreBackend};

const LONG_CONTENT_KEY: &str = "cta-long-content";

fn main() {
    let mut store = JsonStore::new(MemoryStore::new());

    let long_content: bool = store.get(LONG_CONTENT_KEY).unwrap_or(false);
    println!("initial: long_content={long_content}");

    store.set(LONG_CONTENT_KEY, &!long_content);
    println!("toggled: long_content={:?}", store.get::<bool>(LONG_CONTENT_KEY));

    // Malformed storage never escapes as an error.
    let mut backend = MemoryStore::new();
    backend.write(LONG_CONTENT_KEY, "{not json".into());
    let broken = JsonStore::new(backend);
    println!("malformed resolves to {:?}", broken.get::<bool>(LONG_CONTENT_KEY));

    store.remove(LONG_CONTENT_KEY);
    println!("removed: {:?}", store.get::<bool>(LONG_CONTENT_KEY));
}
