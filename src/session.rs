//! Session-scoped shortcut state.
//!
//! A `ShortcutSession` is created once at startup and handed (by clone) to
//! every consumer: UI handlers that list or edit shortcuts and the key-press
//! path that dispatches them. Registry mutations and their persistence are
//! serialized through a single `parking_lot::Mutex`, so "persist after every
//! mutation" holds even when handlers run on several threads.
//!
//! Navigators and bound actions run while the session locks are held and must
//! not call back into the same session.

use erp_shortcuts_config::{KeyValueStore, MemoryStore, Settings, ShortcutEntry};
use erp_shortcuts_keybindings::{
    DispatchOutcome, KeyPress, Navigator, ShortcutConflict, ShortcutDispatcher, ShortcutRegistry,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Registry shared between threads.
pub type SharedRegistry<S = MemoryStore> = Arc<Mutex<ShortcutRegistry<S>>>;

/// Shortcut registry plus dispatcher for one application session.
#[derive(Debug)]
pub struct ShortcutSession<S: KeyValueStore = MemoryStore> {
    registry: SharedRegistry<S>,
    dispatcher: Arc<Mutex<ShortcutDispatcher>>,
}

impl<S: KeyValueStore> Clone for ShortcutSession<S> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<S: KeyValueStore> ShortcutSession<S> {
    /// Start a session: load the registry from `store` using the slot and
    /// dispatch options in `settings`.
    pub fn open(store: S, settings: &Settings) -> Self {
        let registry = ShortcutRegistry::load_with_key(store, settings.storage_key.clone());
        let mut dispatcher = ShortcutDispatcher::new();
        dispatcher.set_suppress_in_text_fields(settings.suppress_in_text_fields);
        Self::from_parts(registry, dispatcher)
    }

    /// Wrap an already loaded registry and a configured dispatcher.
    pub fn from_parts(registry: ShortcutRegistry<S>, dispatcher: ShortcutDispatcher) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            dispatcher: Arc::new(Mutex::new(dispatcher)),
        }
    }

    /// Handle to the shared registry.
    pub fn shared_registry(&self) -> SharedRegistry<S> {
        Arc::clone(&self.registry)
    }

    /// Lock the registry for direct inspection.
    pub fn registry(&self) -> MutexGuard<'_, ShortcutRegistry<S>> {
        self.registry.lock()
    }

    /// Lock the dispatcher, e.g. to bind actions.
    pub fn dispatcher(&self) -> MutexGuard<'_, ShortcutDispatcher> {
        self.dispatcher.lock()
    }

    /// Register a user-defined entry. See [`ShortcutRegistry::add`].
    pub fn add(&self, entry: ShortcutEntry) -> bool {
        self.registry.lock().add(entry)
    }

    /// Remove an entry by id. See [`ShortcutRegistry::remove`].
    ///
    /// Returns whether the entry existed, checked under the same lock as the
    /// removal.
    pub fn remove(&self, id: &str) -> bool {
        let mut registry = self.registry.lock();
        let existed = registry.get(id).is_some();
        registry.remove(id);
        existed
    }

    /// Replace every entry with the built-in set.
    pub fn reset_to_defaults(&self) {
        self.registry.lock().reset_to_defaults();
    }

    pub fn can_add_more(&self) -> bool {
        self.registry.lock().can_add_more()
    }

    /// Copy of the current entries in insertion order.
    pub fn entries(&self) -> Vec<ShortcutEntry> {
        self.registry.lock().entries().to_vec()
    }

    pub fn conflicts(&self) -> Vec<ShortcutConflict> {
        self.registry.lock().conflicts()
    }

    /// Suppress dispatch while a modal surface is open.
    pub fn set_disabled(&self, disabled: bool) {
        self.dispatcher.lock().set_disabled(disabled);
    }

    /// Route one key-press.
    pub fn handle_key_press(
        &self,
        event: &KeyPress,
        navigator: &mut dyn Navigator,
    ) -> DispatchOutcome {
        let mut dispatcher = self.dispatcher.lock();
        let registry = self.registry.lock();
        dispatcher.dispatch(&*registry, event, navigator)
    }

    /// End the session, returning the store once no other handle remains.
    ///
    /// Only a mutation whose write failed is retried; a session that changed
    /// nothing leaves storage as other writers left it.
    pub fn close(self) -> Option<S> {
        if let Err(e) = self.registry.lock().flush() {
            log::error!("Failed to persist shortcuts at session end: {}", e);
        }
        let registry = Arc::try_unwrap(self.registry).ok()?;
        log::info!("Shortcut session closed");
        Some(registry.into_inner().into_store())
    }
}
