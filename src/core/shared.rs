use crate::core::catalog::MenuCatalog;
use crate::core::entry_validation::ValidationFailure;
use crate::domain::model::{Course, MenuEntry, RawEntryInput};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Catalog handle for hosts with more than one thread.
///
/// Writers hold the write lock across validation, id assignment and append,
/// so ids stay unique and insertion order is total. Readers get owned
/// snapshots taken under the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<MenuCatalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn list_all(&self) -> Vec<MenuEntry> {
        self.read().list_all().to_vec()
    }

    pub fn filter_by_course(&self, course: Option<Course>) -> Vec<MenuEntry> {
        self.read()
            .filter_by_course(course)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn add_entry(&self, candidate: RawEntryInput) -> Result<MenuEntry, ValidationFailure> {
        self.write().add_entry(candidate)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // 每次寫入都是驗證後單次 push，中毒的鎖內容仍然一致
    fn read(&self) -> RwLockReadGuard<'_, MenuCatalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MenuCatalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<MenuCatalog> for SharedCatalog {
    fn from(catalog: MenuCatalog) -> Self {
        Self::new(catalog)
    }
}
