//! End-to-end dashboard flows against a scripted wallet service.
//!
//! Key presses go through `update`, requested actions run through
//! `perform`, and the resulting messages are fed back until the app is
//! idle again.

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use common::{Call, MockWalletApi, drive, loaded_app, wallets_json};
use walletdash::dashboard::DashboardView;
use walletdash::history::HistoryView;
use walletdash::models::{DepositRequest, TransferRequest, WalletKey, WalletType};
use walletdash::tui::app::{Focus, Mode};
use walletdash::tui::{Action, App, Event, Message, update};

fn key(code: KeyCode) -> Message {
    Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Types `text` into the field under `focus` and presses Enter.
async fn submit(app: &mut App, api: &MockWalletApi, focus: Focus, text: &str) -> Vec<Action> {
    app.focus = focus;
    let mut actions = update(app, key(KeyCode::Char('i')));
    assert_eq!(app.mode, Mode::Insert);
    for c in text.chars() {
        actions.extend(update(app, key(KeyCode::Char(c))));
    }
    actions.extend(update(app, key(KeyCode::Enter)));
    let issued = actions.clone();
    drive(app, api, actions).await;
    issued
}

fn dodi_a() -> WalletKey {
    WalletKey {
        wallet_type: WalletType::Dodi,
        id: "a".to_string(),
    }
}

#[tokio::test]
async fn test_initial_load_selects_first_wallet_and_its_history() {
    let api = MockWalletApi::new()
        .reply("wallets", 200, common::WALLETS)
        .reply("transactions", 200, common::TRANSACTIONS);

    let app = loaded_app(&api).await;

    assert_eq!(app.dashboard.view(), DashboardView::Wallets);
    assert_eq!(app.dashboard.selected_key(), Some(&dodi_a()));
    assert_eq!(
        api.calls(),
        vec![
            Call::Wallets("user_table_test".to_string()),
            Call::Transactions(dodi_a()),
        ]
    );
    match app.history.view() {
        HistoryView::Rows(rows) => assert_eq!(rows.len(), 2),
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn test_deposit_refetches_wallets_and_history() {
    let api = MockWalletApi::new()
        .reply("wallets", 200, &wallets_json("10"))
        .reply("wallets", 200, &wallets_json("15"))
        .reply("transactions", 200, "[]")
        .reply("transactions", 200, common::TRANSACTIONS)
        .reply("deposit", 201, common::DEPOSIT_SUCCESS);
    let mut app = loaded_app(&api).await;
    api.clear_calls();

    let issued = submit(&mut app, &api, Focus::DepositAmount, "5").await;

    assert_eq!(
        issued,
        vec![Action::Deposit(DepositRequest::new(&dodi_a(), dec!(5)))]
    );
    assert_eq!(app.actions.message(), Some("Deposit of $5.00 successful!"));
    assert!(app.actions.error().is_none());
    assert!(app.actions.deposit_amount.is_empty());
    assert!(!app.actions.is_depositing());

    let calls = api.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], Call::Deposit(_)));
    assert_eq!(calls[1], Call::Wallets("user_table_test".to_string()));
    assert_eq!(calls[2], Call::Transactions(dodi_a()));

    // The new balance comes from the refetch, and the selection survives.
    assert_eq!(app.dashboard.selected_wallet().unwrap().balance, dec!(15));
    assert_eq!(app.dashboard.selected_key(), Some(&dodi_a()));

    // The history shows the rows recorded by the deposit.
    match app.history.view() {
        HistoryView::Rows(rows) => assert_eq!(rows.len(), 2),
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_deposit_sends_nothing() {
    let api = MockWalletApi::new().reply("wallets", 200, &wallets_json("10"));
    let mut app = loaded_app(&api).await;
    api.clear_calls();

    for input in ["0", "-3", "abc"] {
        app.actions.deposit_amount.clear();
        let issued = submit(&mut app, &api, Focus::DepositAmount, input).await;
        assert!(issued.is_empty(), "{input} should not be submitted");
        assert_eq!(
            app.actions.error(),
            Some("Deposit amount must be greater than 0.")
        );
    }
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_negative_transfer_sends_nothing() {
    let api = MockWalletApi::new().reply("wallets", 200, &wallets_json("10"));
    let mut app = loaded_app(&api).await;
    api.clear_calls();
    app.actions.receiver_id.set("b");

    let issued = submit(&mut app, &api, Focus::TransferAmount, "-1").await;

    assert!(issued.is_empty());
    assert!(api.calls().is_empty());
    assert_eq!(
        app.actions.error(),
        Some("Transfer amount must be greater than 0.")
    );
}

#[tokio::test]
async fn test_transfer_to_same_wallet_is_rejected() {
    let api = MockWalletApi::new().reply("wallets", 200, &wallets_json("10"));
    let mut app = loaded_app(&api).await;
    api.clear_calls();
    app.actions.receiver_type = WalletType::Dodi;
    app.actions.receiver_id.set("a");

    let issued = submit(&mut app, &api, Focus::TransferAmount, "1").await;

    assert!(issued.is_empty());
    assert!(api.calls().is_empty());
    assert_eq!(
        app.actions.error(),
        Some("Cannot transfer to the same wallet.")
    );
}

#[tokio::test]
async fn test_transfer_to_same_id_of_other_type_is_sent() {
    let api = MockWalletApi::new()
        .reply("wallets", 200, &wallets_json("10"))
        .reply("wallets", 200, &wallets_json("9"))
        .reply("transfer", 200, common::TRANSFER_SUCCESS);
    let mut app = loaded_app(&api).await;
    api.clear_calls();
    app.actions.receiver_type = WalletType::Dudi;
    app.actions.receiver_id.set("a");

    let issued = submit(&mut app, &api, Focus::TransferAmount, "1").await;

    let receiver = WalletKey {
        wallet_type: WalletType::Dudi,
        id: "a".to_string(),
    };
    assert_eq!(
        issued,
        vec![Action::Transfer(TransferRequest::new(
            &dodi_a(),
            &receiver,
            dec!(1)
        ))]
    );
    assert_eq!(app.actions.message(), Some("Transfer successful!"));
    assert!(app.actions.transfer_amount.is_empty());
    assert!(app.actions.receiver_id.is_empty());
    assert_eq!(app.dashboard.selected_wallet().unwrap().balance, dec!(9));
    assert_eq!(
        &api.calls()[1..],
        &[
            Call::Wallets("user_table_test".to_string()),
            Call::Transactions(dodi_a()),
        ]
    );
}

#[tokio::test]
async fn test_rejected_transfer_shows_service_error_and_keeps_balance() {
    let api = MockWalletApi::new()
        .reply("wallets", 200, &wallets_json("10"))
        .reply("transfer", 400, common::ERROR);
    let mut app = loaded_app(&api).await;
    api.clear_calls();
    app.actions.receiver_id.set("b");

    submit(&mut app, &api, Focus::TransferAmount, "500").await;

    assert_eq!(app.actions.error(), Some("Insufficient balance"));
    assert!(app.actions.message().is_none());
    // No refetch after a failure, and no local balance change.
    assert_eq!(api.calls().len(), 1);
    assert_eq!(app.dashboard.selected_wallet().unwrap().balance, dec!(10));
    assert_eq!(app.actions.transfer_amount.as_str(), "500");
}

#[tokio::test]
async fn test_unreachable_deposit_shows_generic_error() {
    let api = MockWalletApi::new()
        .reply("wallets", 200, &wallets_json("10"))
        .unreachable("deposit");
    let mut app = loaded_app(&api).await;

    submit(&mut app, &api, Focus::DepositAmount, "5").await;

    assert_eq!(app.actions.error(), Some("An error occurred during deposit."));
    assert!(!app.actions.is_depositing());
}

#[tokio::test]
async fn test_deposit_in_flight_blocks_second_submit() {
    let api = MockWalletApi::new().reply("wallets", 200, &wallets_json("10"));
    let mut app = loaded_app(&api).await;

    app.focus = Focus::DepositAmount;
    app.actions.deposit_amount.set("5");
    update(&mut app, key(KeyCode::Char('i')));
    let first = update(&mut app, key(KeyCode::Enter));
    assert_eq!(first.len(), 1);
    assert!(app.actions.is_depositing());

    // The field is disabled while the first request is outstanding.
    update(&mut app, key(KeyCode::Char('i')));
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(
        app.notice.as_ref().map(|n| n.message.as_str()),
        Some("Deposit in progress.")
    );
}

#[tokio::test]
async fn test_selection_falls_back_when_wallet_disappears() {
    let two = r#"[
        { "id": "a", "userId": "u1", "type": "dodi", "balance": 1 },
        { "id": "b", "userId": "u1", "type": "dudi", "balance": 2 }
    ]"#;
    let only_a = r#"[{ "id": "a", "userId": "u1", "type": "dodi", "balance": 1 }]"#;
    let api = MockWalletApi::new()
        .reply("wallets", 200, two)
        .reply("wallets", 200, only_a);
    let mut app = loaded_app(&api).await;

    let actions = update(&mut app, key(KeyCode::Char('j')));
    drive(&mut app, &api, actions).await;
    assert_eq!(app.dashboard.selected_index(), Some(1));

    let actions = update(&mut app, key(KeyCode::Char('r')));
    drive(&mut app, &api, actions).await;

    assert_eq!(app.dashboard.selected_key(), Some(&dodi_a()));
    assert_eq!(app.history.wallet(), Some(&dodi_a()));
    assert_eq!(api.calls().last(), Some(&Call::Transactions(dodi_a())));
}

#[tokio::test]
async fn test_failed_wallet_fetch_shows_message() {
    let api = MockWalletApi::new().unreachable("wallets");
    let app = loaded_app(&api).await;

    assert_eq!(
        app.dashboard.view(),
        DashboardView::Failed(
            "An error occurred while fetching wallets. Make sure your backend server is running."
        )
    );
    assert!(!app.shows_wallets());
}

#[tokio::test]
async fn test_empty_wallet_list_shows_guidance() {
    let api = MockWalletApi::new().reply("wallets", 200, "[]");
    let app = loaded_app(&api).await;

    match app.dashboard.view() {
        DashboardView::Empty(message) => assert!(message.contains("user_table_test")),
        other => panic!("expected empty view, got {other:?}"),
    }
    assert_eq!(app.history.view(), HistoryView::NoWallet);
    assert_eq!(api.calls(), vec![Call::Wallets("user_table_test".to_string())]);
}

#[tokio::test]
async fn test_stale_wallet_response_is_ignored() {
    let api = MockWalletApi::new()
        .reply("wallets", 200, &wallets_json("1"))
        .reply("wallets", 200, &wallets_json("2"));
    let mut app = App::new("user_table_test", "http://localhost:4000");

    let stale = app.start();
    let fresh = vec![app.fetch_wallets()];

    // The first fetch resolves after a second was issued and is discarded.
    drive(&mut app, &api, stale).await;
    assert_eq!(app.dashboard.view(), DashboardView::Loading);

    drive(&mut app, &api, fresh).await;
    assert_eq!(app.dashboard.selected_wallet().unwrap().balance, dec!(2));
}
