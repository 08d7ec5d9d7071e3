//! Platform-specific keybinding resolution.
//!
//! Contains:
//! - `CmdOrCtrl` modifier expansion (Cmd on macOS, Ctrl elsewhere)
//! - Conversion of winit keyboard events into `KeyPress` values, with named
//!   keys mapped to their W3C key names ("F1", "ArrowUp", "Enter")

use crate::matcher::{FocusedElement, KeyPress};
use crate::parser::Modifiers;
use winit::event::{KeyEvent, Modifiers as WinitModifiers};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Resolve the `CmdOrCtrl` modifier for the current platform.
///
/// Returns `(ctrl, meta)` given a `cmd_or_ctrl` flag and the raw `ctrl`/`meta`
/// values from the parsed combo.
///
/// - macOS: `CmdOrCtrl` maps to Meta (Cmd key).
/// - All other platforms: `CmdOrCtrl` maps to Ctrl.
#[inline]
pub fn resolve_cmd_or_ctrl(cmd_or_ctrl: bool, ctrl: bool, meta: bool) -> (bool, bool) {
    if cmd_or_ctrl {
        #[cfg(target_os = "macos")]
        {
            (ctrl, true)
        }
        #[cfg(not(target_os = "macos"))]
        {
            (true, meta)
        }
    } else {
        (ctrl, meta)
    }
}

/// Modifier flags from winit's modifier state.
pub fn modifiers_from_state(state: ModifiersState) -> Modifiers {
    Modifiers {
        ctrl: state.control_key(),
        shift: state.shift_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Key identity string for a winit logical key.
///
/// Returns `None` for dead and unidentified keys, which cannot trigger shortcuts.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_string()),
        Key::Named(named) => Some(named_key_name(*named)),
        _ => None,
    }
}

/// W3C name for a winit named key.
fn named_key_name(named: NamedKey) -> String {
    match named {
        NamedKey::Space => " ".to_string(),
        // winit reports the Windows/Command key as Super
        NamedKey::Super | NamedKey::Meta => "Meta".to_string(),
        // The remaining variants are spelled like their W3C key values
        other => format!("{:?}", other),
    }
}

/// Build a `KeyPress` from a logical key and modifier state.
pub fn key_press_from_key(
    key: &Key,
    state: ModifiersState,
    focus: FocusedElement,
) -> Option<KeyPress> {
    let name = key_name(key)?;
    Some(
        KeyPress::new(name)
            .with_modifiers(modifiers_from_state(state))
            .with_focus(focus),
    )
}

/// Build a `KeyPress` from a winit keyboard event.
///
/// Only key-down events produce a press; releases return `None`.
pub fn key_press_from_winit(
    event: &KeyEvent,
    modifiers: &WinitModifiers,
    focus: FocusedElement,
) -> Option<KeyPress> {
    if !event.state.is_pressed() {
        return None;
    }
    key_press_from_key(&event.logical_key, modifiers.state(), focus)
}
