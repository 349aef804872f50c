//! Integration tests for wire model deserialization against recorded
//! wallet service payloads.

mod common;

use chrono::Utc;
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use walletdash::WalletDashError;
use walletdash::client::decode_response;
use walletdash::models::{
    DepositResponse, Direction, Transaction, TransferResponse, Wallet, WalletKey, WalletType,
};

#[test]
fn test_wallet_list_parse() {
    let wallets: Vec<Wallet> = serde_json::from_str(common::WALLETS).unwrap();

    assert_eq!(wallets.len(), 3);
    assert_eq!(wallets[0].wallet_type, WalletType::Dodi);
    assert_eq!(wallets[0].balance, dec!(10));
    assert_eq!(wallets[0].balance_label(), "$10.00");
    assert_eq!(wallets[1].balance, dec!(250.5));
    assert_eq!(wallets[1].balance_label(), "$250.50");
    assert_eq!(wallets[2].title(), "CODI Wallet");
}

#[test]
fn test_wallets_sharing_an_id_have_distinct_keys() {
    let wallets: Vec<Wallet> = serde_json::from_str(common::WALLETS).unwrap();

    assert_eq!(wallets[0].id, wallets[2].id);
    assert_ne!(wallets[0].key(), wallets[2].key());
    assert!(wallets[2].matches(&WalletKey {
        wallet_type: WalletType::Codi,
        id: "a".to_string(),
    }));
}

#[test]
fn test_transaction_list_parse() {
    let transactions: Vec<Transaction> = serde_json::from_str(common::TRANSACTIONS).unwrap();

    assert_eq!(transactions.len(), 2);

    let deposit = &transactions[0];
    assert_eq!(deposit.direction, Direction::Credit);
    assert_eq!(deposit.direction.label(), "Deposit");
    assert_eq!(deposit.signed_amount(), "+ $20.00");
    assert!(deposit.description().is_none());
    assert_eq!(deposit.timestamp_in(&Utc), "2024-01-01 00:00:00");

    let transfer = &transactions[1];
    assert_eq!(transfer.direction, Direction::Debit);
    assert_eq!(transfer.amount, dec!(7.25));
    assert_eq!(transfer.signed_amount(), "- $7.25");
    assert_eq!(transfer.description(), Some("Transfer to dudi wallet"));
    assert_eq!(transfer.counterparty().as_deref(), Some("to DUDI b"));
    assert_eq!(transfer.timestamp_in(&Utc), "2024-01-02 09:30:00");
}

#[test]
fn test_deposit_response_parse() {
    let response: DepositResponse =
        decode_response(StatusCode::CREATED, common::DEPOSIT_SUCCESS.as_bytes()).unwrap();
    assert_eq!(response.new_balance, Some(dec!(15)));
    assert!(response.error.is_none());
}

#[test]
fn test_transfer_response_parse() {
    let response: TransferResponse =
        decode_response(StatusCode::OK, common::TRANSFER_SUCCESS.as_bytes()).unwrap();
    assert_eq!(response.message.as_deref(), Some("Transfer successful"));
}

#[test]
fn test_error_body_becomes_service_message() {
    let err = decode_response::<TransferResponse>(StatusCode::BAD_REQUEST, common::ERROR.as_bytes())
        .unwrap_err();

    match &err {
        WalletDashError::Api { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("Insufficient balance"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(
        err.user_message("Failed to transfer.", "unreachable"),
        "Insufficient balance"
    );
}

#[test]
fn test_non_json_error_body_has_no_service_message() {
    let err = decode_response::<Vec<Wallet>>(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>")
        .unwrap_err();

    assert!(err.service_message().is_none());
    assert!(!err.is_transport());
    assert_eq!(err.user_message("Failed to deposit.", "unreachable"), "Failed to deposit.");
}
