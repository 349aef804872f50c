//! HTTP client for the wallet service.
//!
//! [`WalletApi`] is the seam between the dashboard and the backend: the
//! terminal UI holds an `Arc<dyn WalletApi>` and tests substitute an
//! in-memory implementation. [`HttpWalletClient`] is the real one; every
//! endpoint is resolved against a single configured base URL.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::Result;
use crate::config::ServiceConfig;
use crate::error::WalletDashError;
use crate::models::{
    DepositRequest, DepositResponse, ErrorBody, Transaction, TransferRequest, TransferResponse,
    Wallet, WalletKey,
};

/// Operations offered by the wallet service.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// `GET /api/wallet/{username}/wallets`
    async fn wallets(&self, username: &str) -> Result<Vec<Wallet>>;

    /// `POST /api/wallet/wallet/{walletType}/deposit`
    async fn deposit(&self, request: &DepositRequest) -> Result<DepositResponse>;

    /// `POST /api/wallet/transfer`
    async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse>;

    /// `GET /api/wallet/wallet/{walletType}/{walletId}/transactions`
    async fn transactions(&self, wallet: &WalletKey) -> Result<Vec<Transaction>>;
}

/// [`WalletApi`] over HTTP with `reqwest`.
pub struct HttpWalletClient {
    http: Client,
    base_url: Url,
}

impl HttpWalletClient {
    /// Builds a client for `config.base_url` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`WalletDashError::Config`] if the base URL does not parse,
    /// or [`WalletDashError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            WalletDashError::Config(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("walletdash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// The base URL every endpoint is joined to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        endpoint_url(&self.base_url, segments)
    }
}

#[async_trait]
impl WalletApi for HttpWalletClient {
    async fn wallets(&self, username: &str) -> Result<Vec<Wallet>> {
        let url = self.url(&["api", "wallet", username, "wallets"])?;
        debug!(%url, "fetching wallets");
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    async fn deposit(&self, request: &DepositRequest) -> Result<DepositResponse> {
        let url = self.url(&["api", "wallet", "wallet", request.wallet_type.as_str(), "deposit"])?;
        debug!(%url, wallet_id = %request.wallet_id, "submitting deposit");
        let response = self.http.post(url).json(request).send().await?;
        read_json(response).await
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse> {
        let url = self.url(&["api", "wallet", "transfer"])?;
        debug!(%url, "submitting transfer");
        let response = self.http.post(url).json(request).send().await?;
        read_json(response).await
    }

    async fn transactions(&self, wallet: &WalletKey) -> Result<Vec<Transaction>> {
        let url = self.url(&[
            "api",
            "wallet",
            "wallet",
            wallet.wallet_type.as_str(),
            &wallet.id,
            "transactions",
        ])?;
        debug!(%url, "fetching transactions");
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }
}

/// Reads the body and decodes it according to the status class.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;
    decode_response(status, &body)
}

/// Decodes a wallet service response.
///
/// A 2xx body is parsed as `T`. Anything else becomes
/// [`WalletDashError::Api`], carrying the body's `error` field when the
/// body is JSON and has one.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());
    warn!(status = status.as_u16(), ?message, "wallet service rejected request");
    Err(WalletDashError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Appends percent-encoded path segments to `base_url`.
///
/// # Errors
///
/// Returns [`WalletDashError::Config`] if `base_url` cannot carry a path.
pub fn endpoint_url(base_url: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| WalletDashError::Config(format!("{base_url} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
