use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Durable favorites storage, injected into the coordinator so tests can
/// substitute an in-memory fake.
///
/// `save` overwrites the whole list in one write; there is no partial
/// update and no remove operation.
pub trait FavoritesStore {
    /// Load the stored list; missing or malformed data reads as empty.
    fn load(&self) -> Vec<String>;

    /// Persist `list`, replacing the stored value.
    fn save(&self, list: &[String]) -> Result<()>;

    /// Identifier of the last-viewed title, if one was recorded.
    fn load_last_viewed(&self) -> Option<String>;
}

impl FavoritesStore for reelscout_store::FileStore {
    fn load(&self) -> Vec<String> {
        self.load_favorites()
    }

    fn save(&self, list: &[String]) -> Result<()> {
        self.save_favorites(list)?;
        Ok(())
    }

    fn load_last_viewed(&self) -> Option<String> {
        reelscout_store::FileStore::load_last_viewed(self)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    favorites: Vec<String>,
    last_viewed: Option<String>,
    save_count: usize,
}

/// In-memory store double. Clones share state so a test can hand one to the
/// coordinator and still inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_favorites(favorites: Vec<String>) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().favorites = favorites;
        store
    }

    pub fn set_last_viewed(&self, imdb_id: impl Into<String>) {
        self.inner.borrow_mut().last_viewed = Some(imdb_id.into());
    }

    /// Snapshot of the stored list.
    pub fn saved(&self) -> Vec<String> {
        self.inner.borrow().favorites.clone()
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        self.inner.borrow().save_count
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.inner.borrow().favorites.clone()
    }

    fn save(&self, list: &[String]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.favorites = list.to_vec();
        inner.save_count += 1;
        Ok(())
    }

    fn load_last_viewed(&self) -> Option<String> {
        self.inner.borrow().last_viewed.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelscout_store::FileStore;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_through_the_trait() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let list = vec!["tt0096895".to_string(), "tt0103776".to_string()];
        FavoritesStore::save(&store, &list).unwrap();
        assert_eq!(FavoritesStore::load(&store), list);
    }

    #[test]
    fn file_store_exposes_last_viewed_through_the_trait() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert_eq!(FavoritesStore::load_last_viewed(&store), None);
        store.save_last_viewed("tt9").unwrap();
        assert_eq!(
            FavoritesStore::load_last_viewed(&store),
            Some("tt9".to_string())
        );
    }
}
