// Student Table - sortable, editable student records in the terminal
//
// Architecture:
// - Students: the record collection and its reducer (edit, reorder)
// - Dnd: sensors, collision detection and the drag state machine
// - TUI (ratatui): table container, rows, cell editor, logs and status
// - Config: TOML file + env overrides, managed through the `config` subcommand

mod cli;
mod config;
mod dnd;
mod logging;
mod students;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --path, --reset)
    if cli::handle_cli()? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    let log_buffer = LogBuffer::new();

    // The guard must live until exit so buffered file logs are flushed
    let _file_guard = init_tracing(&config, &log_buffer);

    tracing::info!(version = config::VERSION, theme = %config.theme, "starting");

    if let Err(e) = tui::run_tui(log_buffer, config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Route logs into the TUI buffer, plus a rolling JSON file when enabled
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("student_table={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()));

    if !config.logging.file_enabled {
        registry.init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.logging.file_dir, e
        );
        registry.init();
        return None;
    }

    let dir = &config.logging.file_dir;
    let prefix = &config.logging.file_prefix;
    let file_appender = match config.logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
        LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File layer uses JSON for structured log parsing
    registry
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
