//! Integration tests for erp-shortcuts-config.
//!
//! Cover the settings → file store → entry persistence path as a host would
//! wire it up at startup.

use erp_shortcuts_config::{
    FileStore, KeyValueStore, Settings, ShortcutEntry, defaults, load_entries, save_entries,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn settings_point_file_store_at_storage_dir() {
    let temp = TempDir::new().unwrap();
    let settings_path = temp.path().join("config").join("settings.yaml");
    fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
    fs::write(
        &settings_path,
        format!(
            "storage_dir: {}\nstorage_key: shop_shortcuts\n",
            temp.path().join("data").display()
        ),
    )
    .unwrap();

    let settings = Settings::load_from(&settings_path).unwrap();
    let store = settings.file_store();

    let entries = vec![ShortcutEntry::new("pos", "Point of Sale")
        .with_target("/pos")
        .with_key_combination("Ctrl+P")];
    save_entries(&store, &settings.storage_key, &entries).unwrap();

    assert!(temp.path().join("data").join("shop_shortcuts.json").exists());
    assert_eq!(load_entries(&store, &settings.storage_key), entries);
}

#[test]
fn stored_json_uses_client_field_names() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    save_entries(&store, "erp_shortcuts", &defaults::builtin_shortcuts()).unwrap();

    let raw = store.get("erp_shortcuts").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["id"], "dashboard");
    assert_eq!(first["keyCombination"], "F1");
    assert_eq!(first["isUserDefined"], false);
    assert_eq!(first["target"], "/dashboard");
}

#[test]
fn client_written_data_loads() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store
        .set(
            "erp_shortcuts",
            r#"[
                {"id":"dashboard","label":"Dashboard","icon":{},"target":"/dashboard","keyCombination":"F1","isUserDefined":false},
                {"id":"custom1","label":"Custom","icon":null,"target":"/x","keyCombination":"Alt+Q","isUserDefined":true}
            ]"#,
        )
        .unwrap();

    let entries = load_entries(&store, "erp_shortcuts");
    assert_eq!(entries.len(), 2);
    assert!(entries[1].is_user_defined);
    assert_eq!(entries[1].key_combination.as_deref(), Some("Alt+Q"));
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    fs::write(temp.path().join("erp_shortcuts.json"), b"\xff\xfe not utf8").unwrap();
    assert_eq!(
        load_entries(&store, "erp_shortcuts"),
        defaults::builtin_shortcuts()
    );
}
