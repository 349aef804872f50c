//! Request and response bodies for the mutating endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wallet::{WalletKey, WalletType};

/// Body of `POST /api/wallet/wallet/{walletType}/deposit`.
///
/// The wallet type travels in the URL path, not the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    #[serde(skip)]
    pub wallet_type: WalletType,
    pub wallet_id: String,
    /// Sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl DepositRequest {
    pub fn new(wallet: &WalletKey, amount: Decimal) -> Self {
        Self {
            wallet_type: wallet.wallet_type,
            wallet_id: wallet.id.clone(),
            amount,
        }
    }
}

/// Response to a deposit. `new_balance` is informational only; the
/// dashboard refetches the authoritative wallet list instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    #[serde(default)]
    pub new_balance: Option<Decimal>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/wallet/transfer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub sender_wallet_type: WalletType,
    pub sender_wallet_id: String,
    pub receiver_wallet_type: WalletType,
    pub receiver_wallet_id: String,
    /// Sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(sender: &WalletKey, receiver: &WalletKey, amount: Decimal) -> Self {
        Self {
            sender_wallet_type: sender.wallet_type,
            sender_wallet_id: sender.id.clone(),
            receiver_wallet_type: receiver.wallet_type,
            receiver_wallet_id: receiver.id.clone(),
            amount,
        }
    }
}

/// Response to a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransferResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body any endpoint may return with a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
