//! Configuration and persistence layer for erp-shortcuts.
//!
//! This crate owns everything the shortcut registry needs that is not about
//! key handling itself:
//!
//! - The `ShortcutEntry` data model and its JSON wire shape
//! - The eleven built-in navigation shortcuts (`F1`..`F11`)
//! - Key/value storage backends (in-memory and file-backed)
//! - Loading and saving the entry set to a named storage slot
//! - Host settings (`settings.yaml`)

pub mod defaults;
pub mod error;
pub mod persistence;
pub mod settings;
pub mod storage;
mod types;

pub use error::{ConfigError, StorageError};
pub use persistence::{load_entries, save_entries};
pub use settings::{LogLevel, Settings};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{IconRef, ShortcutEntry};
