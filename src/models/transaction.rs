//! Transaction history models.

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wallet::{WalletType, format_money};

/// Direction of a transaction relative to the wallet it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Increases the balance (deposit, incoming transfer).
    Credit,
    /// Decreases the balance (outgoing transfer).
    Debit,
}

impl Direction {
    /// Row label: `Deposit` for credits, `Transfer` for debits.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Credit => "Deposit",
            Direction::Debit => "Transfer",
        }
    }

    /// Sign prefix applied to the unsigned amount.
    pub fn sign(&self) -> char {
        match self {
            Direction::Credit => '+',
            Direction::Debit => '-',
        }
    }
}

/// One entry of `GET /api/wallet/wallet/{walletType}/{walletId}/transactions`.
///
/// Fields the dashboard does not use are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Unsigned quantity; accepts a JSON number or numeric string.
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub source_wallet_type: Option<WalletType>,
    #[serde(default)]
    pub source_wallet_id: Option<String>,
    #[serde(default)]
    pub sender_wallet_type: Option<String>,
    #[serde(default)]
    pub sender_wallet_id: Option<String>,
    #[serde(default)]
    pub receiver_wallet_type: Option<String>,
    #[serde(default)]
    pub receiver_wallet_id: Option<String>,
}

impl Transaction {
    /// Amount with its direction sign, e.g. `+ $20.00`.
    pub fn signed_amount(&self) -> String {
        format!("{} {}", self.direction.sign(), format_money(self.amount.abs()))
    }

    /// Description, treating blank text as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Counterparty summary for transfers, e.g. `to DUDI 42`.
    pub fn counterparty(&self) -> Option<String> {
        let (prefix, wallet_type, wallet_id) = match self.direction {
            Direction::Debit => ("to", &self.receiver_wallet_type, &self.receiver_wallet_id),
            Direction::Credit => ("from", &self.sender_wallet_type, &self.sender_wallet_id),
        };
        let wallet_id = wallet_id.as_deref()?;
        Some(match wallet_type.as_deref() {
            Some(wallet_type) => format!("{prefix} {} {wallet_id}", wallet_type.to_uppercase()),
            None => format!("{prefix} {wallet_id}"),
        })
    }

    /// Creation time rendered in `tz` as `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Falls back to the raw string when it is not RFC 3339.
    pub fn timestamp_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(parsed) => parsed
                .with_timezone(tz)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}
