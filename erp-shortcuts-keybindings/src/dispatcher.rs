//! Global key-press dispatch.
//!
//! Turns `KeyPress` events into navigation (or bound actions) by matching the
//! normalized combination against a `ShortcutRegistry`.

use crate::matcher::KeyPress;
use crate::registry::ShortcutRegistry;
use erp_shortcuts_config::KeyValueStore;
use std::collections::HashMap;
use std::fmt;

/// Router capability invoked when a shortcut with a target fires.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate_to(&mut self, path: &str) {
        self(path)
    }
}

/// Callback bound to an entry id.
pub type ShortcutAction = Box<dyn FnMut() + Send>;

/// What a single dispatch did with a key-press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Dispatch is disabled (e.g. a modal dialog is open)
    Disabled,
    /// Focus is on a text-entry element; the press belongs to it
    SuppressedByFocus,
    /// No entry is bound to the combination
    Unmatched { combination: String },
    /// The first matching entry has neither a target nor a bound action;
    /// the key-press is consumed without navigating
    Inert { id: String },
    /// Navigated to the matching entry's target
    Navigated { id: String, target: String },
    /// Ran the action bound to the matching entry
    ActionInvoked { id: String },
}

impl DispatchOutcome {
    /// Whether the host should suppress its default handling of the key-press.
    ///
    /// Any matched entry consumes the key-press, even one with nothing to do.
    pub fn default_prevented(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Navigated { .. }
                | DispatchOutcome::ActionInvoked { .. }
                | DispatchOutcome::Inert { .. }
        )
    }
}

/// Matches key-presses against a registry and routes them.
pub struct ShortcutDispatcher {
    disabled: bool,
    suppress_in_text_fields: bool,
    actions: HashMap<String, ShortcutAction>,
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self {
            disabled: false,
            suppress_in_text_fields: true,
            actions: HashMap::new(),
        }
    }
}

impl fmt::Debug for ShortcutDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutDispatcher")
            .field("disabled", &self.disabled)
            .field("suppress_in_text_fields", &self.suppress_in_text_fields)
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress all matching while `disabled` is set.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            log::debug!("Shortcut dispatch {}", if disabled { "disabled" } else { "enabled" });
        }
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether presses inside text-entry elements are ignored (default: true).
    pub fn set_suppress_in_text_fields(&mut self, suppress: bool) {
        self.suppress_in_text_fields = suppress;
    }

    /// Bind an inline action to an entry id. It takes precedence over the
    /// entry's navigation target.
    pub fn bind_action<F>(&mut self, id: impl Into<String>, action: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.actions.insert(id.into(), Box::new(action));
    }

    /// Remove the action bound to `id`, if any.
    pub fn unbind_action(&mut self, id: &str) -> bool {
        self.actions.remove(id).is_some()
    }

    /// Match `event` against `registry` and route it.
    ///
    /// The first entry in insertion order whose combination equals the event's
    /// normalized combination wins. Every match consumes the key-press.
    pub fn dispatch<S: KeyValueStore>(
        &mut self,
        registry: &ShortcutRegistry<S>,
        event: &KeyPress,
        navigator: &mut dyn Navigator,
    ) -> DispatchOutcome {
        if self.disabled {
            return DispatchOutcome::Disabled;
        }
        if self.suppress_in_text_fields && event.focus.accepts_text() {
            return DispatchOutcome::SuppressedByFocus;
        }

        let combination = event.combination();
        let entry = if event.is_modifier_only() {
            None
        } else {
            registry.find_by_combination(&combination)
        };
        let Some(entry) = entry else {
            log::trace!("No shortcut for {}", combination);
            return DispatchOutcome::Unmatched { combination };
        };

        if let Some(action) = self.actions.get_mut(&entry.id) {
            log::debug!("Shortcut {} -> action '{}'", combination, entry.id);
            action();
            return DispatchOutcome::ActionInvoked {
                id: entry.id.clone(),
            };
        }

        match entry.target.as_deref() {
            Some(target) => {
                log::debug!("Shortcut {} -> navigate {}", combination, target);
                navigator.navigate_to(target);
                DispatchOutcome::Navigated {
                    id: entry.id.clone(),
                    target: target.to_string(),
                }
            }
            None => DispatchOutcome::Inert {
                id: entry.id.clone(),
            },
        }
    }
}
