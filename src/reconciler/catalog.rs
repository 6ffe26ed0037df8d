//! Prefab catalog: the ordered name-to-template table configured at startup.

/// One catalog row. The entry name is the template's name and is the key
/// added detections are matched against.
#[derive(Debug, Clone)]
pub struct CatalogEntry<T> {
    pub name: String,
    pub template: T,
}

impl<T> CatalogEntry<T> {
    pub fn new(name: impl Into<String>, template: T) -> Self {
        Self {
            name: name.into(),
            template,
        }
    }
}

/// Ordered mapping from image name to spawnable template.
///
/// Populated once before events start flowing and read-only afterwards.
/// Order matters: an added detection is scanned against every entry in
/// sequence, and duplicate names spawn one object per matching entry.
#[derive(Debug, Clone, Default)]
pub struct PrefabCatalog<T> {
    entries: Vec<CatalogEntry<T>>,
}

impl<T> PrefabCatalog<T> {
    pub fn from_entries(entries: Vec<CatalogEntry<T>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry matches `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order_and_duplicates() {
        let catalog = PrefabCatalog::from_entries(vec![
            CatalogEntry::new("X", "a"),
            CatalogEntry::new("Y", "b"),
            CatalogEntry::new("X", "c"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("X"));
        assert!(!catalog.contains("Z"));
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["X", "Y", "X"]);
    }
}
