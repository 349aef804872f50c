//! Wire models for the wallet service.
//!
//! Wallets and transactions are backend-owned records mirrored for
//! display; request and response bodies cover the two write paths.

pub mod requests;
pub mod transaction;
pub mod wallet;

pub use requests::{DepositRequest, DepositResponse, ErrorBody, TransferRequest, TransferResponse};
pub use transaction::{Direction, Transaction};
pub use wallet::{Wallet, WalletKey, WalletType};
