//! Keyboard shortcut system for erp-shortcuts.
//!
//! This crate provides the runtime side of shortcuts: a persisted registry of
//! navigation shortcuts and a dispatcher that routes live key-presses to them.
//!
//! Features:
//! - Normalized key combinations ("Ctrl+Shift+A", modifiers in fixed order)
//! - Human-friendly combination parsing with aliases (Cmd, Option, Esc, ...)
//! - Registry with id-based dedup, persistence after every mutation, and
//!   conflict reporting for shared combinations
//! - Dispatch with text-field suppression, a disable switch, and bindable actions
//! - Conversion from winit keyboard events

mod dispatcher;
mod matcher;
pub mod parser;
pub mod platform;
mod registry;

pub use dispatcher::{DispatchOutcome, Navigator, ShortcutAction, ShortcutDispatcher};
pub use matcher::{FocusedElement, KeyPress};
pub use parser::{KeyCombo, Modifiers, ParseError, parse_key_combo};
pub use platform::{key_press_from_key, key_press_from_winit};
pub use registry::{ShortcutConflict, ShortcutRegistry};
