//! Builder for assembling the prefab catalog before runtime.

use crate::reconciler::{CatalogEntry, PrefabCatalog};

/// Builder for a [`PrefabCatalog`].
///
/// Entries keep the order they were added in, and duplicate names are kept
/// as-is: each matching entry spawns its own object for an added detection.
#[derive(Debug, Clone)]
pub struct CatalogBuilder<T> {
    entries: Vec<CatalogEntry<T>>,
}

impl<T> Default for CatalogBuilder<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> CatalogBuilder<T> {
    /// Create a new catalog builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one (name, template) entry.
    pub fn entry(mut self, name: impl Into<String>, template: T) -> Self {
        self.entries.push(CatalogEntry::new(name, template));
        self
    }

    /// Build the final read-only [`PrefabCatalog`].
    pub fn build(self) -> PrefabCatalog<T> {
        PrefabCatalog::from_entries(self.entries)
    }
}
