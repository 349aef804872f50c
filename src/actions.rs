//! Action panel: deposit and transfer forms for the selected wallet.
//!
//! Holds only transient form state. Input is validated locally before any
//! request is built; a rejected submission never reaches the network. Both
//! flows end successful mutations by asking the dashboard to refetch, so
//! balances on screen always come from the wallet service.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::Result;
use crate::models::wallet::format_money;
use crate::models::{
    DepositRequest, DepositResponse, TransferRequest, TransferResponse, WalletKey, WalletType,
};
use crate::text_input::TextInput;

const DEPOSIT_INVALID: &str = "Deposit amount must be greater than 0.";
const DEPOSIT_REJECTED: &str = "Failed to deposit.";
const DEPOSIT_UNREACHABLE: &str = "An error occurred during deposit.";

const TRANSFER_INVALID: &str = "Transfer amount must be greater than 0.";
const TRANSFER_NO_RECEIVER: &str = "Receiver wallet ID is required.";
const TRANSFER_SAME_WALLET: &str = "Cannot transfer to the same wallet.";
const TRANSFER_OK: &str = "Transfer successful!";
const TRANSFER_REJECTED: &str = "Failed to transfer.";
const TRANSFER_UNREACHABLE: &str = "An error occurred during transfer.";

/// Form state for the deposit and transfer flows.
#[derive(Debug, Default)]
pub struct ActionPanel {
    pub deposit_amount: TextInput,
    pub transfer_amount: TextInput,
    pub receiver_type: WalletType,
    pub receiver_id: TextInput,
    message: Option<String>,
    error: Option<String>,
    depositing: bool,
}

impl ActionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last confirmation, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Last validation or request error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a deposit is in flight. The deposit control is disabled meanwhile.
    pub fn is_depositing(&self) -> bool {
        self.depositing
    }

    /// Validates the deposit form for `wallet` and builds the request.
    ///
    /// Returns `None`, with an error set, when the amount is not a number
    /// strictly greater than zero. Returns `None` silently while another
    /// deposit is in flight.
    pub fn submit_deposit(&mut self, wallet: &WalletKey) -> Option<DepositRequest> {
        if self.depositing {
            return None;
        }
        self.clear_status();

        let Some(amount) = parse_amount(self.deposit_amount.as_str()) else {
            self.error = Some(DEPOSIT_INVALID.to_string());
            return None;
        };

        self.depositing = true;
        Some(DepositRequest::new(wallet, amount))
    }

    /// Records the outcome of a deposit. Returns `true` when the wallet
    /// list must be refetched.
    ///
    /// Any `newBalance` in the response is only logged; the refetched list
    /// is the source of truth.
    pub fn finish_deposit(
        &mut self,
        request: &DepositRequest,
        result: Result<DepositResponse>,
    ) -> bool {
        self.depositing = false;
        match result {
            Ok(response) => {
                info!(
                    wallet_id = %request.wallet_id,
                    amount = %request.amount,
                    new_balance = ?response.new_balance,
                    "deposit accepted"
                );
                self.message = Some(format!(
                    "Deposit of {} successful!",
                    format_money(request.amount)
                ));
                self.deposit_amount.clear();
                true
            }
            Err(e) => {
                warn!(wallet_id = %request.wallet_id, "deposit failed: {e}");
                self.error = Some(e.user_message(DEPOSIT_REJECTED, DEPOSIT_UNREACHABLE));
                false
            }
        }
    }

    /// Validates the transfer form for sender `wallet` and builds the request.
    ///
    /// Rejects a non-positive or non-numeric amount, an empty receiver id,
    /// and a receiver equal to the sender.
    pub fn submit_transfer(&mut self, wallet: &WalletKey) -> Option<TransferRequest> {
        self.clear_status();

        let Some(amount) = parse_amount(self.transfer_amount.as_str()) else {
            self.error = Some(TRANSFER_INVALID.to_string());
            return None;
        };

        let receiver_id = self.receiver_id.as_str().trim();
        if receiver_id.is_empty() {
            self.error = Some(TRANSFER_NO_RECEIVER.to_string());
            return None;
        }

        let receiver = WalletKey {
            wallet_type: self.receiver_type,
            id: receiver_id.to_string(),
        };
        if &receiver == wallet {
            self.error = Some(TRANSFER_SAME_WALLET.to_string());
            return None;
        }

        Some(TransferRequest::new(wallet, &receiver, amount))
    }

    /// Records the outcome of a transfer. Returns `true` when the wallet
    /// list must be refetched.
    pub fn finish_transfer(
        &mut self,
        request: &TransferRequest,
        result: Result<TransferResponse>,
    ) -> bool {
        match result {
            Ok(response) => {
                info!(
                    sender = %request.sender_wallet_id,
                    receiver = %request.receiver_wallet_id,
                    amount = %request.amount,
                    service_message = ?response.message,
                    "transfer accepted"
                );
                self.message = Some(TRANSFER_OK.to_string());
                self.transfer_amount.clear();
                self.receiver_id.clear();
                true
            }
            Err(e) => {
                warn!(sender = %request.sender_wallet_id, "transfer failed: {e}");
                self.error = Some(e.user_message(TRANSFER_REJECTED, TRANSFER_UNREACHABLE));
                false
            }
        }
    }

    fn clear_status(&mut self) {
        self.message = None;
        self.error = None;
    }
}

/// Parses a user-typed amount, accepting only values strictly above zero.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
}
