//! Default values and built-in seed data.
//!
//! The free functions here double as `#[serde(default = "...")]` targets for
//! [`crate::Settings`].

use crate::types::ShortcutEntry;

/// Name of the storage slot holding the serialized entry set.
pub fn storage_key() -> String {
    "erp_shortcuts".to_string()
}

pub fn bool_true() -> bool {
    true
}

/// `(id, label, target, icon, key)` for every built-in navigation shortcut.
const BUILTIN_SHORTCUTS: [(&str, &str, &str, &str, &str); 11] = [
    ("dashboard", "Dashboard", "/dashboard", "layout-dashboard", "F1"),
    ("stock-entry", "Stock Entry", "/stock-entry", "package-plus", "F2"),
    ("manual-write-off", "Manual Write-off", "/manual-write-off", "package-minus", "F3"),
    ("inventory", "Inventory", "/inventory", "warehouse", "F4"),
    ("products", "Products", "/products", "package", "F5"),
    ("sales-lookup", "Sales Lookup", "/sales", "receipt", "F6"),
    ("cash-flow", "Cash Flow", "/cash-flow", "wallet", "F7"),
    ("accounts-payable", "Accounts Payable", "/accounts-payable", "credit-card", "F8"),
    ("accounts-receivable", "Accounts Receivable", "/accounts-receivable", "hand-coins", "F9"),
    ("suppliers", "Suppliers", "/suppliers", "truck", "F10"),
    ("purchase-orders", "Purchase Orders", "/purchase-orders", "clipboard-list", "F11"),
];

/// The built-in shortcut set, in display order.
///
/// Used whenever storage holds nothing usable. The set is replaced wholesale,
/// never merged with persisted entries.
pub fn builtin_shortcuts() -> Vec<ShortcutEntry> {
    BUILTIN_SHORTCUTS
        .iter()
        .map(|&(id, label, target, icon, key)| {
            ShortcutEntry::new(id, label)
                .with_target(target)
                .with_icon(icon)
                .with_key_combination(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_count_and_order() {
        let entries = builtin_shortcuts();
        assert_eq!(entries.len(), 11);
        assert_eq!(entries[0].id, "dashboard");
        assert_eq!(entries[0].key_combination.as_deref(), Some("F1"));
        assert_eq!(entries[10].id, "purchase-orders");
        assert_eq!(entries[10].key_combination.as_deref(), Some("F11"));
    }

    #[test]
    fn test_builtin_triggers_are_f1_through_f11() {
        for (i, entry) in builtin_shortcuts().iter().enumerate() {
            assert_eq!(
                entry.key_combination.as_deref(),
                Some(format!("F{}", i + 1).as_str())
            );
            assert!(!entry.is_user_defined);
            assert!(entry.target.is_some());
        }
    }

    #[test]
    fn test_builtin_ids_unique() {
        let entries = builtin_shortcuts();
        let ids: HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }
}
