//! Loading and saving the shortcut entry set.
//!
//! The whole set is stored as one JSON array in a single storage slot and is
//! always rewritten in full.

use crate::defaults;
use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::types::ShortcutEntry;
use std::collections::HashSet;

/// Load the entry set stored under `key`.
///
/// Never fails: a missing slot, a read error, a value that does not decode as
/// an entry array, or an empty array all yield [`defaults::builtin_shortcuts`].
/// Entries repeating an earlier `id` are dropped so ids stay unique.
pub fn load_entries(store: &dyn KeyValueStore, key: &str) -> Vec<ShortcutEntry> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No stored shortcuts under '{}', using built-in set", key);
            return defaults::builtin_shortcuts();
        }
        Err(e) => {
            log::warn!("Failed to read shortcuts slot '{}': {}", key, e);
            return defaults::builtin_shortcuts();
        }
    };

    let entries: Vec<ShortcutEntry> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!(
                "Stored shortcuts under '{}' are unreadable, using built-in set: {}",
                key,
                e
            );
            return defaults::builtin_shortcuts();
        }
    };

    if entries.is_empty() {
        log::info!("Stored shortcut set '{}' is empty, using built-in set", key);
        return defaults::builtin_shortcuts();
    }

    let mut seen = HashSet::new();
    let total = entries.len();
    let entries: Vec<ShortcutEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();
    if entries.len() != total {
        log::warn!(
            "Dropped {} stored shortcut(s) with duplicate ids",
            total - entries.len()
        );
    }

    log::info!("Loaded {} shortcut(s) from '{}'", entries.len(), key);
    entries
}

/// Serialize `entries` and write them to the slot `key`.
pub fn save_entries(
    store: &dyn KeyValueStore,
    key: &str,
    entries: &[ShortcutEntry],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(entries)?;
    store.set(key, &json)?;
    log::debug!("Saved {} shortcut(s) to '{}'", entries.len(), key);
    Ok(())
}
