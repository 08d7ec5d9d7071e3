//! Typed error variants for the erp-shortcuts-config crate.
//!
//! Storage errors surface only through the explicit `persist` paths; the
//! registry's own `load`/`add`/`remove` swallow them and log instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by a [`crate::KeyValueStore`] or by serializing an entry set.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a slot file failed.
    #[error("storage I/O error for '{}': {source}", path.display())]
    Io {
        /// File backing the slot.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The entry set could not be encoded as JSON.
    #[error("failed to encode shortcuts: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The slot name cannot be mapped to a file inside the store directory.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Errors that can occur when loading or saving [`crate::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained invalid YAML.
    #[error("YAML parse error in settings: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}
