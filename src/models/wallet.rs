//! Wallet models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The three parallel wallet kinds a user can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    #[default]
    Dodi,
    Dudi,
    Codi,
}

impl WalletType {
    /// All kinds, in selector order.
    pub const ALL: [WalletType; 3] = [WalletType::Dodi, WalletType::Dudi, WalletType::Codi];

    /// Returns the wire-format name used in URLs and bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Dodi => "dodi",
            WalletType::Dudi => "dudi",
            WalletType::Codi => "codi",
        }
    }

    /// Upper-cased label, e.g. `DODI`.
    pub fn label(&self) -> &'static str {
        match self {
            WalletType::Dodi => "DODI",
            WalletType::Dudi => "DUDI",
            WalletType::Codi => "CODI",
        }
    }

    /// Next kind in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            WalletType::Dodi => WalletType::Dudi,
            WalletType::Dudi => WalletType::Codi,
            WalletType::Codi => WalletType::Dodi,
        }
    }

    /// Previous kind in selector order, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            WalletType::Dodi => WalletType::Codi,
            WalletType::Dudi => WalletType::Dodi,
            WalletType::Codi => WalletType::Dudi,
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dodi" => Ok(WalletType::Dodi),
            "dudi" => Ok(WalletType::Dudi),
            "codi" => Ok(WalletType::Codi),
            other => Err(format!("unknown wallet type: {other}")),
        }
    }
}

/// A wallet as returned by `GET /api/wallet/{username}/wallets`.
///
/// `balance` accepts either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub balance: Decimal,
}

impl Wallet {
    /// The `(id, type)` pair identifying this wallet within a user's set.
    pub fn key(&self) -> WalletKey {
        WalletKey {
            wallet_type: self.wallet_type,
            id: self.id.clone(),
        }
    }

    /// Whether this wallet is the one named by `key`.
    pub fn matches(&self, key: &WalletKey) -> bool {
        self.wallet_type == key.wallet_type && self.id == key.id
    }

    /// Button caption, e.g. `DODI Wallet`.
    pub fn title(&self) -> String {
        format!("{} Wallet", self.wallet_type.label())
    }

    /// Balance with a dollar sign and exactly two decimals.
    pub fn balance_label(&self) -> String {
        format_money(self.balance)
    }
}

/// Identifies one wallet: type plus backend id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletKey {
    pub wallet_type: WalletType,
    pub id: String,
}

impl fmt::Display for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wallet_type, self.id)
    }
}

/// Formats an amount as `$` followed by exactly two decimals.
///
/// Midpoints round away from zero.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}
