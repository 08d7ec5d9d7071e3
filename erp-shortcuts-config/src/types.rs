//! Shortcut entry types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque reference to a presentational glyph.
///
/// The registry stores and round-trips this value but never interprets it;
/// the presentation layer resolves it to an actual icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    /// Create an icon reference from any string identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no icon was assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Accept any JSON value for the icon slot.
    ///
    /// Older stored data carries arbitrary placeholder objects here. Anything
    /// that is not a string decodes to the empty reference instead of failing
    /// the whole entry set.
    fn lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(name) => Self(name),
            _ => Self::default(),
        })
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A keyboard shortcut bound to a navigation target.
///
/// Serialized with camelCase field names (`keyCombination`, `isUserDefined`)
/// so the stored slot stays compatible with data written by the web client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEntry {
    /// Unique identifier, stable across sessions
    pub id: String,

    /// Human-readable display name
    pub label: String,

    /// Presentational glyph handle
    #[serde(default, deserialize_with = "IconRef::lenient")]
    pub icon: IconRef,

    /// Route path to navigate to when the shortcut fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Normalized trigger, e.g. "Ctrl+Shift+A". `None` means no active trigger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_combination: Option<String>,

    /// True for entries created at runtime, false for built-ins
    #[serde(default)]
    pub is_user_defined: bool,
}

impl ShortcutEntry {
    /// Create an entry with no target, trigger or icon.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: IconRef::default(),
            target: None,
            key_combination: None,
            is_user_defined: false,
        }
    }

    /// Set the navigation target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the key combination.
    pub fn with_key_combination(mut self, combo: impl Into<String>) -> Self {
        self.key_combination = Some(combo.into());
        self
    }

    /// Set the icon reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = IconRef::new(icon);
        self
    }

    /// Whether this entry can ever be triggered from the keyboard.
    pub fn has_trigger(&self) -> bool {
        self.key_combination.as_deref().is_some_and(|k| !k.is_empty())
    }
}
