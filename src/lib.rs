pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::render::{renderer_for, OutputFormat};
pub use crate::config::MenuConfig;
pub use crate::core::{
    catalog::{filter_entries, MenuCatalog},
    entry_validation::{ValidationError, ValidationFailure},
    shared::SharedCatalog,
};
pub use crate::domain::model::{Course, EntryId, MenuEntry, Price, PriceError, RawEntryInput};
pub use crate::utils::error::{MenuError, Result};
