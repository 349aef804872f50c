use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use walletdash::WalletDashError;
use walletdash::config::fetch_config;

#[tokio::main]
async fn main() -> Result<(), WalletDashError> {
    let app_config = fetch_config()?;

    // The TUI owns stdout, so logs only go to a file when one is configured.
    if let Some(path) = &app_config.log_file {
        init_file_logging(path)?;
    }

    walletdash::tui::run(&app_config.service).await
}

/// Installs a tracing subscriber that appends to `path`.
fn init_file_logging(path: &Path) -> Result<(), WalletDashError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| WalletDashError::Io(format!("failed to open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
