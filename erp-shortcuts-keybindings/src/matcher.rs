//! Key-press events and their normalized combination strings.
//!
//! A `KeyPress` is what the host delivers for each physical key-press: the key
//! identity, four independent modifier flags, and the role of the element that
//! currently has focus. Matching against registered shortcuts is an exact
//! comparison of normalized combination strings.

use super::parser::{self, KeyCombo, Modifiers};

/// Role of the UI element holding focus when a key was pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FocusedElement {
    /// Nothing in particular (document body)
    #[default]
    None,
    /// Single-line text input
    TextInput,
    /// Multi-line text input
    TextArea,
    /// Selection control (drop-down, list box)
    Select,
    /// Any element explicitly marked editable
    Editable,
    /// Buttons, links and other non-text elements
    Other,
}

impl FocusedElement {
    /// Whether typing into this element must not be intercepted.
    pub fn accepts_text(self) -> bool {
        matches!(
            self,
            FocusedElement::TextInput
                | FocusedElement::TextArea
                | FocusedElement::Select
                | FocusedElement::Editable
        )
    }
}

/// A single physical key-press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Key identity as reported by the host (e.g. "a", "F1", "Shift")
    pub key: String,
    pub modifiers: Modifiers,
    pub focus: FocusedElement,
}

impl KeyPress {
    /// A press of `key` with no modifiers and nothing focused.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            focus: FocusedElement::None,
        }
    }

    /// The press described by a parsed combination.
    pub fn from_combo(combo: &KeyCombo) -> Self {
        Self {
            key: combo.key.clone(),
            modifiers: combo.modifiers,
            focus: FocusedElement::None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn with_focus(mut self, focus: FocusedElement) -> Self {
        self.focus = focus;
        self
    }

    /// Whether the pressed key is itself a modifier.
    pub fn is_modifier_only(&self) -> bool {
        parser::is_modifier_key(&self.key)
    }

    /// Normalized combination string for this press.
    ///
    /// Modifier tokens come first in `Ctrl`, `Shift`, `Alt`, `Meta` order
    /// regardless of press order, followed by the key unless the key is a
    /// modifier itself. A pure modifier press ("Ctrl+Shift") has no key token
    /// and never equals a registered combination.
    pub fn combination(&self) -> String {
        if self.is_modifier_only() {
            parser::combine(&self.modifiers, None)
        } else {
            parser::combine(&self.modifiers, Some(&parser::normalize_key(&self.key)))
        }
    }

    /// Check if this press triggers the given combination string.
    pub fn matches(&self, combination: &str) -> bool {
        !self.is_modifier_only() && self.combination() == combination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_key_combo;

    #[test]
    fn test_plain_character_is_upper_cased() {
        assert_eq!(KeyPress::new("a").combination(), "A");
        assert_eq!(KeyPress::new("a").with_alt().combination(), "Alt+A");
    }

    #[test]
    fn test_named_key_passes_through() {
        assert_eq!(KeyPress::new("F1").combination(), "F1");
        assert_eq!(KeyPress::new("ArrowDown").with_ctrl().combination(), "Ctrl+ArrowDown");
    }

    #[test]
    fn test_modifier_order_is_fixed() {
        // Builder order mimics physical press order; output order never changes
        let a = KeyPress::new("a").with_meta().with_alt().with_shift().with_ctrl();
        let b = KeyPress::new("a").with_ctrl().with_shift().with_alt().with_meta();
        assert_eq!(a.combination(), "Ctrl+Shift+Alt+Meta+A");
        assert_eq!(a.combination(), b.combination());
    }

    #[test]
    fn test_pure_modifier_press_has_no_key_token() {
        let press = KeyPress::new("Shift").with_shift();
        assert_eq!(press.combination(), "Shift");
        assert!(press.is_modifier_only());
        assert!(!press.matches("Shift"));

        let press = KeyPress::new("Control").with_ctrl().with_shift();
        assert_eq!(press.combination(), "Ctrl+Shift");
    }

    #[test]
    fn test_matches_is_exact() {
        let press = KeyPress::new("q").with_alt();
        assert!(press.matches("Alt+Q"));
        assert!(!press.matches("Alt+q"));
        assert!(!press.matches("Ctrl+Alt+Q"));
        assert!(!press.matches("Q"));
    }

    #[test]
    fn test_from_combo_round_trips() {
        let combo = parse_key_combo("shift+ctrl+x").unwrap();
        let press = KeyPress::from_combo(&combo);
        assert_eq!(press.combination(), combo.to_string());
        assert_eq!(press.focus, FocusedElement::None);
    }

    #[test]
    fn test_text_accepting_focus() {
        assert!(FocusedElement::TextInput.accepts_text());
        assert!(FocusedElement::TextArea.accepts_text());
        assert!(FocusedElement::Select.accepts_text());
        assert!(FocusedElement::Editable.accepts_text());
        assert!(!FocusedElement::None.accepts_text());
        assert!(!FocusedElement::Other.accepts_text());
    }
}
