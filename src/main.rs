use anyhow::{Context, Result};
use clap::Parser;
use erp_shortcuts::cli::{self, Cli};
use erp_shortcuts::config::{FileStore, Settings};
use erp_shortcuts::session::ShortcutSession;

fn main() -> Result<()> {
    let args = Cli::parse();

    // Routes all log::info!() etc. to the debug log file.
    // CLI --log-level takes precedence over RUST_LOG, then settings (applied below).
    erp_shortcuts::debug::init_log_bridge(args.log_level.map(cli::LogLevelArg::to_level_filter));

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load().context("Failed to load settings")?,
    };
    erp_shortcuts::debug::apply_settings_level(settings.log_level.to_level_filter());
    log::info!("Starting erp-shortcuts v{}", erp_shortcuts::VERSION);

    let store = match &args.store_dir {
        Some(dir) => FileStore::new(dir),
        None => settings.file_store(),
    };
    log::info!("Using shortcut store at {}", store.dir().display());

    let session = ShortcutSession::open(store, &settings);
    let mut stdout = std::io::stdout().lock();
    let result = cli::execute(&args.command, &session, &mut stdout);
    drop(stdout);
    session.close();

    let code = result?;
    if code != 0 {
        // Session is closed, nothing left to clean up
        std::process::exit(code);
    }
    Ok(())
}
