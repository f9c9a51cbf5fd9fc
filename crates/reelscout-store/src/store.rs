use crate::Result;
use std::path::{Path, PathBuf};

/// Entry holding the favorited identifier list, serialized as a JSON array.
pub const FAVORITES_ENTRY: &str = "favorites.json";

/// Entry holding the last-viewed identifier, stored as plain text.
pub const LAST_VIEWED_ENTRY: &str = "last_viewed";

/// File-backed key-value store for the favorites list and the last-viewed
/// identifier.
///
/// Each entry is one file under the store root. Every mutation rewrites the
/// whole value; there is no partial-update API.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the favorites list.
    ///
    /// A missing or malformed entry reads as the empty list so a corrupt
    /// file never takes the rest of the application down.
    pub fn load_favorites(&self) -> Vec<String> {
        let path = self.root.join(FAVORITES_ENTRY);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Overwrite the favorites entry with `list`, whole-value.
    pub fn save_favorites(&self, list: &[String]) -> Result<()> {
        let content = serde_json::to_string(list)?;
        std::fs::write(self.root.join(FAVORITES_ENTRY), content)?;
        Ok(())
    }

    /// Read the last-viewed identifier, if one was recorded.
    pub fn load_last_viewed(&self) -> Option<String> {
        let path = self.root.join(LAST_VIEWED_ENTRY);
        let content = std::fs::read_to_string(&path).ok()?;
        let id = content.trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    /// Record `imdb_id` as the last-viewed identifier.
    pub fn save_last_viewed(&self, imdb_id: &str) -> Result<()> {
        std::fs::write(self.root.join(LAST_VIEWED_ENTRY), imdb_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> FileStore {
        FileStore::open(dir.path().join("store")).expect("open store")
    }

    #[test]
    fn missing_favorites_entry_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.load_favorites().is_empty());
    }

    #[test]
    fn favorites_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let list = vec![
            "tt0096895".to_string(),
            "tt0103776".to_string(),
            "tt0112462".to_string(),
        ];
        store.save_favorites(&list).unwrap();
        assert_eq!(store.load_favorites(), list);
    }

    #[test]
    fn save_overwrites_the_whole_value() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save_favorites(&["tt1".to_string(), "tt2".to_string()]).unwrap();
        store.save_favorites(&["tt3".to_string()]).unwrap();
        assert_eq!(store.load_favorites(), vec!["tt3".to_string()]);
    }

    #[test]
    fn malformed_favorites_entry_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        std::fs::write(store.root().join(FAVORITES_ENTRY), "{not json").unwrap();
        assert!(store.load_favorites().is_empty());
    }

    #[test]
    fn last_viewed_absent_or_blank_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.load_last_viewed(), None);

        std::fs::write(store.root().join(LAST_VIEWED_ENTRY), "  \n").unwrap();
        assert_eq!(store.load_last_viewed(), None);
    }

    #[test]
    fn last_viewed_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.save_last_viewed("tt0103776").unwrap();
        assert_eq!(store.load_last_viewed(), Some("tt0103776".to_string()));
    }
}
