//! Crate-level error types.
//!
//! [`WalletDashError`] unifies every error source (configuration, terminal,
//! HTTP transport, JSON, wallet service rejections) behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WalletDashError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum WalletDashError {
    /// Configuration could not be read or holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The wallet service answered with a non-success status.
    ///
    /// `message` carries the body's `error` field when the service sent one.
    #[error("wallet service returned {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Api { status: u16, message: Option<String> },
}

impl WalletDashError {
    /// Returns `true` for failures that happened before a usable answer
    /// arrived (network, timeout, unreadable body).
    pub fn is_transport(&self) -> bool {
        !matches!(self, WalletDashError::Api { .. })
    }

    /// The message the wallet service put in the response body, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            WalletDashError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Maps the error to the text shown in a panel.
    ///
    /// A service-provided message is shown verbatim. Otherwise `rejected`
    /// is used for application failures and `unreachable` for transport
    /// failures.
    pub fn user_message(&self, rejected: &str, unreachable: &str) -> String {
        if let Some(message) = self.service_message() {
            return message.to_string();
        }
        if self.is_transport() {
            unreachable.to_string()
        } else {
            rejected.to_string()
        }
    }
}
