pub mod catalog;
pub mod entry_validation;
pub mod seed;
pub mod shared;
pub mod summary;

pub use crate::domain::model::{Course, EntryId, MenuEntry, Price, RawEntryInput};
pub use crate::domain::ports::{ConfigProvider, MenuRenderer};
pub use crate::utils::error::Result;
