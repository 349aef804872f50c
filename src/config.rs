//! Application configuration loaded from environment variables.
//!
//! Every endpoint of the wallet service is resolved against one base URL:
//! - `WALLETDASH_BASE_URL`: wallet service root (default `http://localhost:4000`)
//! - `WALLETDASH_USERNAME`: whose wallets to show (default `user_table_test`)
//! - `WALLETDASH_TIMEOUT_SECS`: per-request timeout (default 10)
//! - `WALLETDASH_LOG_FILE`: optional log destination
//!
//! An optional `WALLETDASH_CONFIG` names a JSON file holding the same keys
//! (`base_url`, `username`, `timeout_secs`, `log_file`). Environment
//! variables win over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Default wallet service root.
const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// User shown when none is configured.
const DEFAULT_USERNAME: &str = "user_table_test";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub service: ServiceConfig,
    /// File that receives tracing output. `None` discards logs.
    pub log_file: Option<PathBuf>,
}

/// Wallet service connection values.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub username: String,
    pub timeout: Duration,
}

/// Optional values read from the `WALLETDASH_CONFIG` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    username: Option<String>,
    timeout_secs: Option<u64>,
    log_file: Option<PathBuf>,
}

impl FileConfig {
    fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::WalletDashError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            crate::WalletDashError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

/// Loads the application configuration from the environment, layered over
/// the optional `WALLETDASH_CONFIG` file.
///
/// # Errors
///
/// Returns [`WalletDashError::Config`](crate::WalletDashError::Config) if
/// the config file cannot be read, the base URL is not an http(s) URL, or
/// the timeout is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let file = match non_empty_var("WALLETDASH_CONFIG") {
        Some(path) => FileConfig::load(Path::new(&path))?,
        None => FileConfig::default(),
    };

    let base_url = non_empty_var("WALLETDASH_BASE_URL")
        .or(file.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = normalize_base_url(&base_url)?;

    let username = non_empty_var("WALLETDASH_USERNAME")
        .or(file.username)
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let timeout_secs = match non_empty_var("WALLETDASH_TIMEOUT_SECS") {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            crate::WalletDashError::Config(format!(
                "WALLETDASH_TIMEOUT_SECS must be a positive integer, got {raw:?}"
            ))
        })?,
        None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };
    if timeout_secs == 0 {
        return Err(crate::WalletDashError::Config(
            "request timeout must be at least 1 second".to_string(),
        ));
    }

    let log_file = non_empty_var("WALLETDASH_LOG_FILE")
        .map(PathBuf::from)
        .or(file.log_file);

    Ok(AppConfig {
        service: ServiceConfig {
            base_url,
            username,
            timeout: Duration::from_secs(timeout_secs),
        },
        log_file,
    })
}

/// Trims trailing slashes and checks the scheme.
fn normalize_base_url(raw: &str) -> crate::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(crate::WalletDashError::Config(format!(
            "base URL must start with http:// or https://, got {raw:?}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
