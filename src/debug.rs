//! Log bridge for erp-shortcuts.
//!
//! Routes every `log::info!()` etc. from all workspace crates to a debug log
//! file so CLI output on stdout stays clean:
//!
//! - Unix/macOS: `/tmp/erp_shortcuts_debug.log`
//! - Windows: `%TEMP%\erp_shortcuts_debug.log`
//!
//! When `RUST_LOG` is set, records are mirrored to stderr as well.
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then settings. The
//! bridge is installed before settings are read so their loading is logged
//! whenever the flag or `RUST_LOG` asks for it.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    file: Mutex<LogFile>,
    mirror_stderr: bool,
    /// Level came from the CLI flag or `RUST_LOG`; settings must not override it
    pinned: bool,
}

/// Debug log file, opened on the first record that reaches it.
#[derive(Default)]
struct LogFile {
    file: Option<File>,
    opened: bool,
}

impl LogFile {
    fn get(&mut self) -> Option<&mut File> {
        if !self.opened {
            self.opened = true;
            // Silently continue without a file if it can't be opened
            self.file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
                .ok();
        }
        self.file.as_mut()
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/erp_shortcuts_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("erp_shortcuts_debug.log")
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a `RUST_LOG`-style level ("debug", "warn", ...).
///
/// Module-scoped directives are not supported; anything unrecognised yields `None`.
pub fn parse_level(value: &str) -> Option<log::LevelFilter> {
    value.trim().parse::<log::LevelFilter>().ok()
}

/// Level chosen by the CLI flag, else by `RUST_LOG`.
///
/// `None` means neither applies and the settings file decides.
pub fn pinned_level(
    cli_level: Option<log::LevelFilter>,
    env_level: Option<&str>,
) -> Option<log::LevelFilter> {
    cli_level.or_else(|| env_level.and_then(parse_level))
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().get() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().file.as_mut() {
            let _ = file.flush();
        }
    }
}

/// Install the log bridge. Call this before anything else logs.
///
/// The level comes from `cli_level`, then `RUST_LOG`. When neither is set
/// logging stays off until [`apply_settings_level`] runs. Safe to call more
/// than once; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let env_level = std::env::var("RUST_LOG").ok();
    let pinned = pinned_level(cli_level, env_level.as_deref());

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        file: Mutex::new(LogFile::default()),
        mirror_stderr: env_level.is_some(),
        pinned: pinned.is_some(),
    });

    if log::set_logger(bridge).is_ok() {
        let level = pinned.unwrap_or(log::LevelFilter::Off);
        log::set_max_level(level);
        log::info!(
            "erp-shortcuts debug session started at {} (level={})",
            get_timestamp(),
            level
        );
    }
}

/// Apply the level from the settings file unless the CLI flag or `RUST_LOG`
/// already chose one.
pub fn apply_settings_level(settings_level: log::LevelFilter) {
    let Some(bridge) = BRIDGE.get() else {
        return;
    };
    if bridge.pinned || log::max_level() == settings_level {
        return;
    }
    log::set_max_level(settings_level);
    log::info!("Log level set to {} from settings", settings_level);
}
