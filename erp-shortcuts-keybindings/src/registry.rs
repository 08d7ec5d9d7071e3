//! The shortcut registry.
//!
//! Owns the ordered entry set, persists it after every mutation, and answers
//! lookups by id and by key combination.

use crate::parser;
use erp_shortcuts_config::{
    KeyValueStore, MemoryStore, ShortcutEntry, StorageError, defaults, load_entries,
    save_entries,
};

/// Entries that share one key combination.
///
/// Only the first id (insertion order) is reachable through dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutConflict {
    pub combination: String,
    pub ids: Vec<String>,
}

/// Registry of shortcut entries backed by a key/value store.
#[derive(Debug)]
pub struct ShortcutRegistry<S: KeyValueStore = MemoryStore> {
    /// Entries in insertion order; ids are unique
    entries: Vec<ShortcutEntry>,
    store: S,
    storage_key: String,
    /// Set when the last write to the store failed
    unsaved: bool,
}

impl<S: KeyValueStore> ShortcutRegistry<S> {
    /// Load the registry from the default storage slot.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, defaults::storage_key())
    }

    /// Load the registry from a named storage slot.
    ///
    /// Falls back to the built-in set when the slot is missing, unreadable
    /// or empty. Never fails.
    pub fn load_with_key(store: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let entries = load_entries(&store, &storage_key);
        log::info!(
            "Shortcut registry initialized with {} entries",
            entries.len()
        );
        Self {
            entries,
            store,
            storage_key,
            unsaved: false,
        }
    }

    /// Re-read the entry set from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.entries = load_entries(&self.store, &self.storage_key);
        self.unsaved = false;
    }

    /// Register a new user-defined entry.
    ///
    /// Returns `false` without touching the set if an entry with the same id
    /// exists. Shared key combinations are accepted (first registered wins at
    /// dispatch) but logged. A parseable `key_combination` is stored in its
    /// canonical form.
    pub fn add(&mut self, mut entry: ShortcutEntry) -> bool {
        if self.get(&entry.id).is_some() {
            log::warn!("Shortcut '{}' already exists, not adding", entry.id);
            return false;
        }

        entry.is_user_defined = true;
        if let Some(raw) = entry.key_combination.take() {
            entry.key_combination = Some(match parser::parse_key_combo(&raw) {
                Ok(combo) => combo.to_string(),
                Err(e) => {
                    log::warn!(
                        "Keeping unparseable key combination '{}' for '{}' verbatim: {}",
                        raw,
                        entry.id,
                        e
                    );
                    raw
                }
            });
        }

        if let Some(combo) = entry.key_combination.as_deref()
            && let Some(existing) = self.find_by_combination(combo)
        {
            log::warn!(
                "Shortcut '{}' reuses {} already bound to '{}'; '{}' keeps priority",
                entry.id,
                combo,
                existing.id,
                existing.id
            );
        }

        log::info!(
            "Registered shortcut: {} -> {:?} ({:?})",
            entry.id,
            entry.target,
            entry.key_combination
        );
        self.entries.push(entry);
        self.persist_logged();
        true
    }

    /// Remove the entry with `id`. Missing ids are a no-op; storage is
    /// rewritten either way.
    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() < before {
            log::info!("Removed shortcut '{}'", id);
        } else {
            log::debug!("Remove requested for unknown shortcut '{}'", id);
        }
        self.persist_logged();
    }

    /// Whether another entry may be added. The registry has no size cap.
    pub fn can_add_more(&self) -> bool {
        true
    }

    /// Replace the whole set with the built-in entries and persist.
    pub fn reset_to_defaults(&mut self) {
        self.entries = defaults::builtin_shortcuts();
        log::info!("Shortcut registry reset to built-in defaults");
        self.persist_logged();
    }

    /// Write the current set to storage.
    pub fn persist(&self) -> Result<(), StorageError> {
        save_entries(&self.store, &self.storage_key, &self.entries)
    }

    /// Retry the last write if it failed. A no-op when storage is current,
    /// so a registry that was only read never overwrites the slot.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        if !self.unsaved {
            return Ok(());
        }
        self.persist()?;
        self.unsaved = false;
        log::info!("Flushed pending shortcut changes");
        Ok(())
    }

    /// Whether a mutation has not reached the store yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Persist, logging instead of returning failures.
    ///
    /// The in-memory set stays authoritative for the session when the store
    /// rejects a write.
    fn persist_logged(&mut self) {
        match self.persist() {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                log::error!("Failed to persist shortcuts: {}", e);
                self.unsaved = true;
            }
        }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&ShortcutEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// First entry (insertion order) bound to exactly `combination`.
    pub fn find_by_combination(&self, combination: &str) -> Option<&ShortcutEntry> {
        self.entries
            .iter()
            .find(|entry| entry.key_combination.as_deref() == Some(combination))
    }

    /// Entries created at runtime.
    pub fn user_defined(&self) -> impl Iterator<Item = &ShortcutEntry> {
        self.entries.iter().filter(|entry| entry.is_user_defined)
    }

    /// Groups of entries sharing a key combination, ordered by first occurrence.
    pub fn conflicts(&self) -> Vec<ShortcutConflict> {
        let mut conflicts: Vec<ShortcutConflict> = Vec::new();
        for entry in self.entries.iter().filter(|e| e.has_trigger()) {
            let combo = entry.key_combination.as_deref().unwrap_or_default();
            match conflicts.iter_mut().find(|c| c.combination == combo) {
                Some(group) => group.ids.push(entry.id.clone()),
                None => conflicts.push(ShortcutConflict {
                    combination: combo.to_string(),
                    ids: vec![entry.id.clone()],
                }),
            }
        }
        conflicts.retain(|c| c.ids.len() > 1);
        conflicts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage slot name.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the registry, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
