//! Integration tests for erp-shortcuts-keybindings.
//!
//! These tests exercise the load → add/remove → persist → reload → dispatch
//! pipeline against both the in-memory and the file-backed store.

use erp_shortcuts_config::{FileStore, KeyValueStore, MemoryStore, ShortcutEntry};
use erp_shortcuts_keybindings::{
    DispatchOutcome, FocusedElement, KeyPress, ShortcutDispatcher, ShortcutRegistry,
    parse_key_combo,
};
use tempfile::TempDir;

fn custom1() -> ShortcutEntry {
    ShortcutEntry::new("custom1", "Custom")
        .with_target("/x")
        .with_key_combination("Alt+Q")
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn empty_storage_yields_builtins() {
    let registry = ShortcutRegistry::load(MemoryStore::new());
    assert_eq!(registry.len(), 11);
    let first = &registry.entries()[0];
    assert_eq!(first.id, "dashboard");
    assert_eq!(first.key_combination.as_deref(), Some("F1"));
}

#[test]
fn corrupt_storage_yields_builtins() {
    let store = MemoryStore::new();
    store.set("erp_shortcuts", "{ definitely not an array").unwrap();
    let registry = ShortcutRegistry::load(store);
    assert_eq!(registry.len(), 11);
}

#[test]
fn persisted_empty_array_yields_builtins() {
    let store = MemoryStore::new();
    let mut registry = ShortcutRegistry::load(store.clone());
    for id in registry
        .entries()
        .iter()
        .map(|e| e.id.clone())
        .collect::<Vec<_>>()
    {
        registry.remove(&id);
    }
    assert!(registry.is_empty());

    let reloaded = ShortcutRegistry::load(store);
    assert_eq!(reloaded.len(), 11);
}

// ---------------------------------------------------------------------------
// Mutation and persistence
// ---------------------------------------------------------------------------

#[test]
fn add_then_reload_keeps_user_entry() {
    let store = MemoryStore::new();
    let mut registry = ShortcutRegistry::load(store.clone());
    assert!(registry.add(custom1()));

    let reloaded = ShortcutRegistry::load(store);
    let entry = reloaded.get("custom1").expect("entry survives restart");
    assert!(entry.is_user_defined);
    assert_eq!(entry.target.as_deref(), Some("/x"));
    assert_eq!(reloaded.len(), 12);
}

#[test]
fn duplicate_add_leaves_set_unchanged() {
    let mut registry = ShortcutRegistry::load(MemoryStore::new());
    assert!(registry.add(custom1()));
    let before = registry.entries().to_vec();

    let clash = ShortcutEntry::new("custom1", "Other").with_target("/y");
    assert!(!registry.add(clash));
    assert_eq!(registry.entries(), before.as_slice());
}

#[test]
fn remove_unknown_id_leaves_set_unchanged() {
    let mut registry = ShortcutRegistry::load(MemoryStore::new());
    let before = registry.entries().to_vec();
    registry.remove("does-not-exist");
    assert_eq!(registry.entries(), before.as_slice());
}

#[test]
fn persist_of_loaded_set_is_idempotent() {
    let store = MemoryStore::new();
    let registry = ShortcutRegistry::load(store.clone());
    registry.persist().unwrap();
    let first = store.get("erp_shortcuts").unwrap();

    let reloaded = ShortcutRegistry::load(store.clone());
    assert_eq!(reloaded.entries(), registry.entries());
    reloaded.persist().unwrap();
    assert_eq!(store.get("erp_shortcuts").unwrap(), first);
}

#[test]
fn file_store_survives_restart() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("data");

    {
        let mut registry = ShortcutRegistry::load(FileStore::new(&dir));
        assert!(registry.add(custom1()));
        registry.remove("suppliers");
    }

    let registry = ShortcutRegistry::load(FileStore::new(&dir));
    assert_eq!(registry.len(), 11);
    assert!(registry.get("suppliers").is_none());
    assert!(registry.get("custom1").unwrap().is_user_defined);
    assert!(dir.join("erp_shortcuts.json").exists());
}

#[test]
fn unwritable_store_keeps_in_memory_state() {
    let temp = TempDir::new().unwrap();
    // A regular file where the store expects a directory makes every write fail
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let mut registry = ShortcutRegistry::load(FileStore::new(&blocker));
    assert!(registry.add(custom1()));
    assert!(registry.get("custom1").is_some());
    assert!(registry.persist().is_err());
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn unconfigured_combination_is_not_intercepted() {
    let registry = ShortcutRegistry::load(MemoryStore::new());
    let mut dispatcher = ShortcutDispatcher::new();
    let mut visited: Vec<String> = Vec::new();

    let event = KeyPress::new("A").with_ctrl().with_shift();
    let outcome = dispatcher.dispatch(&registry, &event, &mut |p: &str| {
        visited.push(p.to_string())
    });

    assert!(!outcome.default_prevented());
    assert!(visited.is_empty());
}

#[test]
fn f1_in_text_input_is_suppressed() {
    let registry = ShortcutRegistry::load(MemoryStore::new());
    let mut dispatcher = ShortcutDispatcher::new();
    let mut visited: Vec<String> = Vec::new();

    let event = KeyPress::new("F1").with_focus(FocusedElement::TextInput);
    let outcome = dispatcher.dispatch(&registry, &event, &mut |p: &str| {
        visited.push(p.to_string())
    });

    assert_eq!(outcome, DispatchOutcome::SuppressedByFocus);
    assert!(visited.is_empty());
}

#[test]
fn custom_alt_q_navigates_exactly_once() {
    let mut registry = ShortcutRegistry::load(MemoryStore::new());
    assert!(registry.add(custom1()));
    let mut dispatcher = ShortcutDispatcher::new();
    let mut visited: Vec<String> = Vec::new();

    let event = KeyPress::new("q").with_alt();
    let outcome = dispatcher.dispatch(&registry, &event, &mut |p: &str| {
        visited.push(p.to_string())
    });

    assert!(outcome.default_prevented());
    assert_eq!(visited, vec!["/x".to_string()]);
}

#[test]
fn first_registered_wins_on_shared_combination() {
    let mut registry = ShortcutRegistry::load(MemoryStore::new());
    registry.add(
        ShortcutEntry::new("a", "A")
            .with_target("/a")
            .with_key_combination("Ctrl+K"),
    );
    registry.add(
        ShortcutEntry::new("b", "B")
            .with_target("/b")
            .with_key_combination("ctrl+k"),
    );
    assert_eq!(registry.conflicts().len(), 1);

    let mut dispatcher = ShortcutDispatcher::new();
    let mut visited: Vec<String> = Vec::new();
    let event = KeyPress::new("k").with_ctrl();
    dispatcher.dispatch(&registry, &event, &mut |p: &str| visited.push(p.to_string()));
    assert_eq!(visited, vec!["/a".to_string()]);

    // Removing the winner exposes the next entry
    registry.remove("a");
    visited.clear();
    dispatcher.dispatch(&registry, &event, &mut |p: &str| visited.push(p.to_string()));
    assert_eq!(visited, vec!["/b".to_string()]);
}

#[test]
fn parsed_combination_dispatches() {
    let registry = ShortcutRegistry::load(MemoryStore::new());
    let mut dispatcher = ShortcutDispatcher::new();
    let mut visited: Vec<String> = Vec::new();

    let combo = parse_key_combo("f10").unwrap();
    let outcome = dispatcher.dispatch(&registry, &KeyPress::from_combo(&combo), &mut |p: &str| {
        visited.push(p.to_string())
    });

    assert_eq!(
        outcome,
        DispatchOutcome::Navigated {
            id: "suppliers".to_string(),
            target: "/suppliers".to_string(),
        }
    );
    assert_eq!(visited, vec!["/suppliers".to_string()]);
}

#[test]
fn builtins_all_dispatch_to_their_targets() {
    let registry = ShortcutRegistry::load(MemoryStore::new());
    let mut dispatcher = ShortcutDispatcher::new();

    for (i, entry) in registry.entries().iter().enumerate() {
        let mut visited: Vec<String> = Vec::new();
        let event = KeyPress::new(format!("F{}", i + 1));
        dispatcher.dispatch(&registry, &event, &mut |p: &str| visited.push(p.to_string()));
        assert_eq!(visited.as_slice(), [entry.target.clone().unwrap()]);
    }
}
