//! Pool entries for scene objects spawned per recognized image.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global spawn ID counter for unique ID generation.
static SPAWN_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reset the global spawn ID counter (useful for testing).
pub fn reset_spawn_id_counter() {
    SPAWN_ID_COUNTER.store(0, Ordering::SeqCst);
}

/// Get the next unique spawn ID.
fn next_spawn_id() -> u64 {
    SPAWN_ID_COUNTER.fetch_add(1, Ordering::SeqCst) + 1
}

/// One spawned scene object, keyed by the catalog name it was created from.
///
/// The reconciler holds the handle but not destruction authority; the host
/// engine owns the object's lifetime.
#[derive(Debug, Clone)]
pub struct SpawnedObject<H> {
    /// Unique spawn identifier
    pub id: u64,
    /// Catalog entry name captured at spawn time; the match key for updates
    pub name: String,
    /// Scene-graph reference returned by `instantiate`
    pub handle: H,
    /// Mirror of the last visibility pushed to the scene graph
    pub active: bool,
}

impl<H> SpawnedObject<H> {
    /// Record a freshly instantiated object. Spawned objects start visible.
    pub fn new(name: impl Into<String>, handle: H) -> Self {
        Self {
            id: next_spawn_id(),
            name: name.into(),
            handle,
            active: true,
        }
    }
}
