use crate::domain::model::{MenuEntry, RawEntryInput};
use crate::utils::error::Result;

/// Source of the catalog's title and seed rows.
pub trait ConfigProvider: Send + Sync {
    fn menu_title(&self) -> &str;
    fn seed_items(&self) -> &[RawEntryInput];
}

pub trait MenuRenderer: Send + Sync {
    fn render(&self, title: &str, entries: &[&MenuEntry]) -> Result<String>;
}
