//! Key combination parser.
//!
//! Parses human-readable key strings like "ctrl+shift+a" or "CmdOrCtrl+K" into
//! `KeyCombo` values whose `Display` form is the canonical normalized
//! combination ("Ctrl+Shift+A") used for matching and storage.

use std::fmt;
use std::str::FromStr;

/// Key identities that are modifiers in their own right.
///
/// A press of one of these never contributes a key token to a combination.
pub const MODIFIER_KEYS: [&str; 4] = ["Control", "Shift", "Alt", "Meta"];

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Set of held modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Command key on macOS, Windows/Super key elsewhere
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    /// Tokens for the held modifiers, always in `Ctrl`, `Shift`, `Alt`, `Meta` order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.ctrl, "Ctrl"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
            (self.meta, "Meta"),
        ]
        .into_iter()
        .filter_map(|(held, token)| held.then_some(token))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A parsed key combination (modifiers + one non-modifier key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    /// Canonical key token: upper-cased single character or a key name such as "F1"
    pub key: String,
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&combine(&self.modifiers, Some(&self.key)))
    }
}

impl FromStr for KeyCombo {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_combo(s)
    }
}

/// Whether `key` is one of the four modifier key identities.
pub fn is_modifier_key(key: &str) -> bool {
    MODIFIER_KEYS.contains(&key)
}

/// Canonical form of a pressed key: single characters are upper-cased,
/// multi-character key names pass through unchanged.
pub fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_uppercase().collect(),
        _ => key.to_string(),
    }
}

/// Join modifier tokens and an optional key token with `+`.
pub(crate) fn combine(modifiers: &Modifiers, key: Option<&str>) -> String {
    let mut parts: Vec<&str> = modifiers.tokens().collect();
    if let Some(key) = key {
        parts.push(key);
    }
    parts.join("+")
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers (case-insensitive):
/// - `Ctrl`, `Control` - Control key
/// - `Shift` - Shift key
/// - `Alt`, `Option` - Alt/Option key
/// - `Meta`, `Cmd`, `Command`, `Super`, `Win` - Meta/Cmd key
/// - `CmdOrCtrl` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Single characters: `A`, `b`, `1`, `+` (as in `Ctrl++`)
/// - Named keys: `F1`-`F24`, `Enter`, `Escape`, `Space`, `Tab`, arrows, etc.
/// - Any other multi-character name is kept verbatim
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError("Empty key combination".to_string()));
    }

    // A trailing "+" key is written as "++" ("Ctrl++") or stands alone ("+").
    let (head, plus_key) = if s == "+" {
        ("", true)
    } else if let Some(head) = s.strip_suffix("++") {
        (head, true)
    } else {
        (s, false)
    };

    let mut parts: Vec<&str> = if head.is_empty() {
        Vec::new()
    } else {
        head.split('+')
            .map(|part| if part == " " { part } else { part.trim() })
            .collect()
    };
    if plus_key {
        parts.push("+");
    }

    let mut modifiers = Modifiers::default();
    let mut cmd_or_ctrl = false;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        if part.is_empty() {
            return Err(ParseError(format!("Empty key in combination '{}'", s)));
        }

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "meta" | "cmd" | "command" | "super" | "win" => {
                modifiers.meta = true;
                true
            }
            "cmdorctrl" => {
                cmd_or_ctrl = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{}'",
                    part
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            // Last part is a modifier with no key - invalid
            return Err(ParseError(
                "Key combination ends with modifier, no key specified".to_string(),
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;

    let (ctrl, meta) =
        crate::platform::resolve_cmd_or_ctrl(cmd_or_ctrl, modifiers.ctrl, modifiers.meta);
    modifiers.ctrl = ctrl;
    modifiers.meta = meta;

    Ok(KeyCombo {
        modifiers,
        key: parse_key(key_str),
    })
}

/// Canonicalize a key token.
fn parse_key(s: &str) -> String {
    if let Some(named) = parse_named_key(s) {
        return named;
    }
    normalize_key(s)
}

/// Map key-name aliases (case-insensitive) to their canonical names.
fn parse_named_key(s: &str) -> Option<String> {
    let lower = s.to_lowercase();

    // Function keys
    if let Some(n) = lower.strip_prefix('f')
        && let Ok(n) = n.parse::<u8>()
        && (1..=24).contains(&n)
    {
        return Some(format!("F{n}"));
    }

    let name = match lower.as_str() {
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "space" | "spacebar" => " ",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "insert" | "ins" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" | "pgup" => "PageUp",
        "pagedown" | "pgdn" => "PageDown",

        // Arrow keys
        "up" | "arrowup" => "ArrowUp",
        "down" | "arrowdown" => "ArrowDown",
        "left" | "arrowleft" => "ArrowLeft",
        "right" | "arrowright" => "ArrowRight",

        _ => return None,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let combo = parse_key_combo("alt+meta+shift+ctrl+a").unwrap();
        assert_eq!(combo.to_string(), "Ctrl+Shift+Alt+Meta+A");
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(parse_key_combo("f1").unwrap().key, "F1");
        assert_eq!(parse_key_combo("F11").unwrap().to_string(), "F11");
        assert_eq!(parse_key_combo("Shift+f24").unwrap().to_string(), "Shift+F24");
        // F25 is not a function key and stays verbatim
        assert_eq!(parse_key_combo("f25").unwrap().key, "f25");
    }

    #[test]
    fn test_key_aliases() {
        assert_eq!(parse_key_combo("Esc").unwrap().key, "Escape");
        assert_eq!(parse_key_combo("Ctrl+Return").unwrap().to_string(), "Ctrl+Enter");
        assert_eq!(parse_key_combo("PgDn").unwrap().key, "PageDown");
        assert_eq!(parse_key_combo("Up").unwrap().key, "ArrowUp");
        assert_eq!(parse_key_combo("Ctrl+Space").unwrap().to_string(), "Ctrl+ ");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(parse_key_combo("Alt+NumLock").unwrap().to_string(), "Alt+NumLock");
    }

    #[test]
    fn test_plus_key() {
        assert_eq!(parse_key_combo("Ctrl++").unwrap().to_string(), "Ctrl++");
        assert_eq!(parse_key_combo("+").unwrap().key, "+");
    }

    #[test]
    fn test_space_key_round_trips() {
        let canonical = parse_key_combo("Ctrl+Space").unwrap().to_string();
        assert_eq!(parse_key_combo(&canonical).unwrap().to_string(), canonical);
    }

    #[test]
    fn test_errors() {
        assert!(parse_key_combo("").is_err());
        assert!(parse_key_combo("   ").is_err());
        assert!(parse_key_combo("Ctrl+Shift").is_err());
        assert!(parse_key_combo("Ctrl+A+B").is_err());
        assert!(parse_key_combo("Ctrl++A").is_err());
    }

    #[test]
    fn test_cmd_or_ctrl_resolves_per_platform() {
        let combo = parse_key_combo("CmdOrCtrl+K").unwrap();
        #[cfg(target_os = "macos")]
        assert_eq!(combo.to_string(), "Meta+K");
        #[cfg(not(target_os = "macos"))]
        assert_eq!(combo.to_string(), "Ctrl+K");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("a"), "A");
        assert_eq!(normalize_key("1"), "1");
        assert_eq!(normalize_key("é"), "É");
        assert_eq!(normalize_key("F5"), "F5");
        assert_eq!(normalize_key("ArrowUp"), "ArrowUp");
    }

    #[test]
    fn test_modifier_tokens_order() {
        let mods = Modifiers {
            ctrl: true,
            shift: false,
            alt: true,
            meta: true,
        };
        assert_eq!(mods.tokens().collect::<Vec<_>>(), ["Ctrl", "Alt", "Meta"]);
        assert!(Modifiers::NONE.is_empty());
    }
}
