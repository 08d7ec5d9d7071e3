// Library exports for the erp-shortcuts binary and for hosts embedding the
// shortcut system.
//
// The shortcut model, defaults, storage and settings live in
// `erp-shortcuts-config`; parsing, matching, the registry and dispatch live in
// `erp-shortcuts-keybindings`. This crate adds the session wrapper shared
// across threads, the log bridge and the CLI.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod session;

pub use erp_shortcuts_config as config;
pub use erp_shortcuts_keybindings as keybindings;

pub use session::{SharedRegistry, ShortcutSession};
