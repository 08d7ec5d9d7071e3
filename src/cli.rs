//! Command-line interface for erp-shortcuts.
//!
//! Every subcommand operates on one shortcut session: the binary opens the
//! configured store, runs the command, and closes the session. Only commands
//! that change the set write to the store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use erp_shortcuts_config::{KeyValueStore, ShortcutEntry};
use erp_shortcuts_keybindings::{DispatchOutcome, FocusedElement, KeyPress, parse_key_combo};
use std::io::Write;
use std::path::PathBuf;

use crate::session::ShortcutSession;

/// erp-shortcuts - manage and test ERP navigation shortcuts
#[derive(Parser, Debug)]
#[command(name = "erp-shortcuts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the shortcut store (overrides settings)
    #[arg(long, value_name = "DIR", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Set log level (overrides RUST_LOG and settings)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Element that holds focus for a simulated key-press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FocusArg {
    #[default]
    None,
    Input,
    Textarea,
    Select,
    Editable,
    Other,
}

impl From<FocusArg> for FocusedElement {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::None => FocusedElement::None,
            FocusArg::Input => FocusedElement::TextInput,
            FocusArg::Textarea => FocusedElement::TextArea,
            FocusArg::Select => FocusedElement::Select,
            FocusArg::Editable => FocusedElement::Editable,
            FocusArg::Other => FocusedElement::Other,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all shortcuts in dispatch order
    List,

    /// Add a user-defined shortcut
    Add {
        /// Unique identifier
        id: String,

        /// Display label
        label: String,

        /// Navigation target (route)
        #[arg(long)]
        target: Option<String>,

        /// Key combination, e.g. "Ctrl+Shift+K" or "Alt+Q"
        #[arg(long)]
        key: Option<String>,

        /// Icon identifier
        #[arg(long)]
        icon: Option<String>,
    },

    /// Remove a shortcut by id
    Remove {
        /// Identifier of the shortcut to remove
        id: String,
    },

    /// Restore the built-in shortcuts, discarding custom ones
    Reset,

    /// Simulate a key-press and report what dispatch does
    Press {
        /// Key combination to press, e.g. "F4" or "Alt+Q"
        combo: String,

        /// Element holding focus during the press
        #[arg(long, value_enum, default_value_t = FocusArg::None)]
        focus: FocusArg,
    },

    /// Report key combinations shared by more than one shortcut
    Conflicts,
}

/// Run one subcommand against `session`, writing human-readable output to
/// `out`. Returns the process exit code.
pub fn execute<S: KeyValueStore>(
    command: &Commands,
    session: &ShortcutSession<S>,
    out: &mut impl Write,
) -> Result<i32> {
    match command {
        Commands::List => {
            for entry in session.entries() {
                writeln!(
                    out,
                    "{} {:<22} {:<12} {:<24} {}",
                    if entry.is_user_defined { '*' } else { ' ' },
                    entry.id,
                    entry.key_combination.as_deref().unwrap_or("-"),
                    entry.target.as_deref().unwrap_or("-"),
                    entry.label
                )?;
            }
            Ok(0)
        }
        Commands::Add {
            id,
            label,
            target,
            key,
            icon,
        } => {
            let mut entry = ShortcutEntry::new(id.clone(), label.clone());
            if let Some(target) = target {
                entry = entry.with_target(target.clone());
            }
            if let Some(key) = key {
                entry = entry.with_key_combination(key.clone());
            }
            if let Some(icon) = icon {
                entry = entry.with_icon(icon.clone());
            }
            if session.add(entry) {
                writeln!(out, "Added shortcut '{}'", id)?;
                Ok(0)
            } else {
                writeln!(out, "A shortcut with id '{}' already exists", id)?;
                Ok(1)
            }
        }
        Commands::Remove { id } => {
            if session.remove(id) {
                writeln!(out, "Removed shortcut '{}'", id)?;
            } else {
                writeln!(out, "No shortcut with id '{}'", id)?;
            }
            Ok(0)
        }
        Commands::Reset => {
            session.reset_to_defaults();
            writeln!(out, "Restored {} built-in shortcuts", session.entries().len())?;
            Ok(0)
        }
        Commands::Press { combo, focus } => {
            let combo = parse_key_combo(combo)
                .with_context(|| format!("Invalid key combination '{}'", combo))?;
            let event = KeyPress::from_combo(&combo).with_focus((*focus).into());
            // Navigation is reported through the outcome
            let outcome = session.handle_key_press(&event, &mut |_: &str| {});
            writeln!(out, "{}", describe_outcome(&outcome))?;
            Ok(0)
        }
        Commands::Conflicts => {
            let conflicts = session.conflicts();
            if conflicts.is_empty() {
                writeln!(out, "No conflicting key combinations")?;
            }
            for conflict in conflicts {
                writeln!(
                    out,
                    "{}: {} (only '{}' is reachable)",
                    conflict.combination,
                    conflict.ids.join(", "),
                    conflict.ids[0]
                )?;
            }
            Ok(0)
        }
    }
}

fn describe_outcome(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Disabled => "Shortcuts are disabled".to_string(),
        DispatchOutcome::SuppressedByFocus => {
            "Ignored: focus is on a text-entry element".to_string()
        }
        DispatchOutcome::Unmatched { combination } => {
            format!("No shortcut bound to {}", combination)
        }
        DispatchOutcome::Inert { id } => format!("Matched '{}' but it has no target", id),
        DispatchOutcome::Navigated { id, target } => format!("'{}' -> {}", id, target),
        DispatchOutcome::ActionInvoked { id } => format!("'{}' ran its action", id),
    }
}
