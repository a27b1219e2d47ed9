use crate::core::entry_validation::{validate_candidate, ValidatedEntry, ValidationFailure};
use crate::core::seed::DEFAULT_SEED;
use crate::domain::model::{Course, EntryId, MenuEntry, RawEntryInput};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};

/// Ordered, append-only collection of menu entries for one session.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
    next_id: u64,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_default_seed() -> Self {
        let mut catalog = Self::new();
        for (name, description, course, price) in DEFAULT_SEED {
            catalog.push(ValidatedEntry {
                name: name.to_string(),
                description: description.to_string(),
                course,
                price,
            });
        }
        tracing::debug!("Seeded catalog with {} built-in entries", catalog.len());
        catalog
    }

    /// Builds a catalog by running every seed row through `add_entry`.
    /// Stops at the first invalid row.
    pub fn from_seed<I>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawEntryInput>,
    {
        let mut catalog = Self::new();
        for (index, raw) in seed.into_iter().enumerate() {
            catalog
                .add_entry(raw)
                .map_err(|failure| MenuError::SeedEntry { index, failure })?;
        }
        Ok(catalog)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let catalog = Self::from_seed(config.seed_items().iter().cloned())?;
        tracing::info!(
            "📋 Loaded '{}' with {} entries",
            config.menu_title(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn list_all(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn filter_by_course(&self, course: Option<Course>) -> Vec<&MenuEntry> {
        let filtered = filter_entries(&self.entries, course);
        tracing::debug!(
            "Filter {:?} matched {} of {} entries",
            course,
            filtered.len(),
            self.entries.len()
        );
        filtered
    }

    pub fn add_entry(&mut self, candidate: RawEntryInput) -> std::result::Result<MenuEntry, ValidationFailure> {
        match validate_candidate(&candidate) {
            Ok(valid) => {
                let entry = self.push(valid).clone();
                tracing::info!(
                    "✅ Added entry {} '{}' ({}, {})",
                    entry.id,
                    entry.name,
                    entry.course,
                    entry.price
                );
                Ok(entry)
            }
            Err(failure) => {
                tracing::warn!("Rejected menu entry: {}", failure);
                Err(failure)
            }
        }
    }

    pub fn get(&self, id: &EntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn count_by_course(&self, course: Course) -> usize {
        self.entries.iter().filter(|entry| entry.course == course).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, valid: ValidatedEntry) -> &MenuEntry {
        // Default 衍生的 next_id 為 0，從 1 開始編號
        let sequence = self.next_id.max(1);
        self.next_id = sequence + 1;

        let index = self.entries.len();
        self.entries.push(MenuEntry {
            id: EntryId::from_sequence(sequence),
            name: valid.name,
            description: valid.description,
            course: valid.course,
            price: valid.price,
        });
        &self.entries[index]
    }
}

/// Stable course filter over any sequence of entries; `None` keeps everything.
pub fn filter_entries<'a, I>(entries: I, course: Option<Course>) -> Vec<&'a MenuEntry>
where
    I: IntoIterator<Item = &'a MenuEntry>,
{
    entries
        .into_iter()
        .filter(|entry| course.map_or(true, |c| entry.course == c))
        .collect()
}
