//! End-to-end swap flows against in-memory collaborators.

mod common;

use common::*;
use lib_solana::tokens::{SOL_MINT, USDC_MINT, USDT_MINT};
use shared::SubmitSwapResponse;
use std::time::Duration;
use swap_client::app::{AssetDescriptor, SwapEvent, SwapOrchestrator, SwapOutcome, SwapPhase};
use swap_client::config::SwapConfig;
use swap_client::core::{FailureReason, SwapError};
use swap_client::services::{NotificationHub, WalletNotification};

// region:    --- Quoting

#[tokio::test]
async fn test_quote_is_requested_net_of_platform_fee() {
    let h = harness();
    h.quoted_sol_to_usdc("1.5").await;

    let requests = h.quotes.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].amount, 1_497_000_000);
    assert_eq!(requests[0].input_mint, SOL_MINT);
    assert_eq!(requests[0].output_mint, USDC_MINT);
    assert_eq!(requests[0].taker.as_deref(), Some(WALLET));

    let quote = h.swap.quote().expect("quote");
    assert_eq!(quote.gross_amount, 1_500_000_000);
    assert_eq!(quote.platform_fee, 3_000_000);
    assert_eq!(quote.in_amount, 1_497_000_000);
    assert_eq!(h.swap.phase(), SwapPhase::QuoteReady);
    assert_eq!(h.swap.fee_breakdown(), Some((3_000_000, 1_497_000_000)));
}

#[tokio::test]
async fn test_invalid_amounts_never_reach_the_network() {
    let h = harness();
    h.quoted_sol_to_usdc("abc").await;
    h.swap.set_amount("0");
    settle().await;
    h.swap.set_amount("");
    settle().await;

    assert!(h.quotes.requests().is_empty());
    assert!(h.swap.quote().is_none());
    assert_eq!(h.swap.phase(), SwapPhase::Idle);
}

#[tokio::test]
async fn test_amount_is_truncated_to_input_decimals() {
    let h = harness();
    h.swap.select_input_asset(usdc());
    h.swap.set_amount("1.23456789");
    assert_eq!(h.swap.amount(), "1.234567");

    let two = AssetDescriptor::new("TwoDecimaLs1111111111111111111111111111111", "TWO", 2);
    h.swap.select_input_asset(two);
    assert_eq!(h.swap.amount(), "1.23");

    h.swap.set_amount("0.999");
    assert_eq!(h.swap.amount(), "0.99");
}

#[tokio::test(start_paused = true)]
async fn test_result_for_an_old_pair_is_dropped() {
    let h = harness();
    h.balances.set(SOL_MINT, 10_000_000_000);
    let gate = h.quotes.gate_next();

    h.swap.select_input_asset(sol());
    h.swap.select_output_asset(usdc());
    h.swap.set_amount("1");
    settle().await;

    // First fetch (USDC) is still in flight when the pair changes.
    h.swap.select_output_asset(usdt());
    tokio::time::sleep(Duration::from_secs(3)).await;
    let _ = gate.send(());
    settle().await;

    let requests = h.quotes.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].output_mint, USDC_MINT);
    assert_eq!(requests[1].output_mint, USDT_MINT);

    let quote = h.swap.quote().expect("quote");
    assert_eq!(quote.output_mint, USDT_MINT);

    let applied = h
        .drain()
        .into_iter()
        .filter(|event| matches!(event, SwapEvent::QuoteUpdated(Some(_))))
        .count();
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn test_no_route_clears_quote_with_notice() {
    let h = harness();
    h.quotes.set_mode(QuoteMode::ErrorCoded);
    h.quoted_sol_to_usdc("1").await;

    assert!(h.swap.quote().is_none());
    assert_eq!(h.swap.phase(), SwapPhase::Idle);
    assert!(h.notices().contains(&"No quote available for this amount".to_string()));
}

#[tokio::test]
async fn test_network_failure_shows_generic_notice() {
    let h = harness();
    h.quotes.set_mode(QuoteMode::NetworkError);
    h.quoted_sol_to_usdc("1").await;

    assert!(h.swap.quote().is_none());
    let notices = h.notices();
    assert!(notices.contains(&"Network error, unable to fetch quote".to_string()));
    assert!(notices.iter().all(|notice| !notice.contains("connection refused")));
}

#[tokio::test]
async fn test_quote_for_a_different_input_amount_is_rejected() {
    let h = harness();
    h.quotes.set_mode(QuoteMode::PartialInput);
    h.quoted_sol_to_usdc("1.5").await;

    assert!(h.swap.quote().is_none());
    assert_eq!(h.swap.phase(), SwapPhase::Idle);
    assert!(h.notices().contains(&"No quote available for this amount".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_selecting_the_other_side_flips_the_pair() {
    let h = harness();
    h.quoted_sol_to_usdc("1").await;

    h.swap.select_input_asset(usdc());
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(h.swap.input_asset(), Some(usdc()));
    assert_eq!(h.swap.output_asset(), Some(sol()));
    let quote = h.swap.quote().expect("quote");
    assert!(quote.matches_pair(USDC_MINT, SOL_MINT));
}

#[tokio::test]
async fn test_percent_shortcut_keeps_sol_buffer() {
    let h = harness();
    h.balances.set(SOL_MINT, 1_005_000_000);
    h.balances.set(USDC_MINT, 3_000_001);
    h.swap.select_input_asset(sol());
    h.swap.select_output_asset(usdc());

    assert_eq!(h.swap.set_amount_percent(100), Ok("1".to_string()));

    h.swap.flip_assets();
    assert_eq!(h.swap.set_amount_percent(50), Ok("1.5".to_string()));
    assert!(matches!(h.swap.set_amount_percent(0), Err(SwapError::Validation(_))));
}

// endregion: --- Quoting

// region:    --- Preview

#[tokio::test]
async fn test_insufficient_balance_stops_before_prepare() {
    let h = harness();
    h.quoted_sol_to_usdc("1").await;
    h.balances.set(SOL_MINT, 1_000_000_000);

    let result = h.swap.preview().await;

    assert_eq!(result, Err(SwapError::InsufficientBalance { symbol: "SOL".to_string() }));
    assert!(h.executor.prepare_requests().is_empty());
    assert_eq!(h.swap.phase(), SwapPhase::QuoteReady);
    assert!(h.notices().contains(&"Insufficient SOL balance".to_string()));
}

#[tokio::test]
async fn test_preview_requires_credentials() {
    let h = harness_with(SwapConfig::default(), None);
    h.quoted_sol_to_usdc("1").await;

    assert_eq!(h.swap.preview().await, Err(SwapError::NotAuthenticated));
    assert!(h.executor.prepare_requests().is_empty());
}

#[tokio::test]
async fn test_preview_without_quote_is_rejected() {
    let h = harness();
    let result = h.swap.preview().await;
    assert!(matches!(result, Err(SwapError::InvalidPhase { action: "preview", .. })));
}

#[tokio::test(start_paused = true)]
async fn test_prepare_failure_returns_to_idle_and_requotes() {
    let h = harness();
    h.executor.fail_prepare("Backend error (502)");
    h.quoted_sol_to_usdc("1").await;
    h.drain();

    let result = h.swap.preview().await;
    assert!(matches!(result, Err(SwapError::Prepare(_))));
    assert!(h.swap.prepared().is_none());

    let events = h.drain();
    assert!(events.contains(&SwapEvent::PhaseChanged(SwapPhase::Idle)));
    assert!(events.iter().any(|event| matches!(
        event,
        SwapEvent::Notice(notice) if notice.message == "Unable to prepare the swap, please try again"
    )));

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(h.quotes.requests().len(), 2);
    assert_eq!(h.swap.phase(), SwapPhase::QuoteReady);
    assert_eq!(h.swap.amount(), "1");
}

#[tokio::test]
async fn test_cancel_preview_keeps_the_quote() {
    let h = harness();
    h.quoted_sol_to_usdc("1").await;
    h.swap.preview().await.expect("prepared");

    assert_eq!(h.swap.cancel_preview(), Ok(()));

    assert_eq!(h.swap.phase(), SwapPhase::QuoteReady);
    assert!(h.swap.prepared().is_none());
    assert!(h.swap.quote().is_some());
    assert!(h.swap.cancel_preview().is_err());
}

#[tokio::test]
async fn test_wallet_must_be_unlocked_to_build() {
    let fakes = Fakes::new();
    let deps = fakes.deps(FakeSigner::locked(), Some("jwt"));
    let result = SwapOrchestrator::with_channel(SwapConfig::default(), deps);
    assert!(matches!(result, Err(SwapError::WalletLocked)));
}

// endregion: --- Preview

// region:    --- Confirm

#[tokio::test]
async fn test_successful_swap_resets_form() {
    let h = harness();
    h.quoted_sol_to_usdc("1.5").await;
    let quote = h.swap.quote().expect("quote");

    let prepared = h.swap.preview().await.expect("prepared");
    assert_eq!(h.swap.phase(), SwapPhase::ReadyToConfirm);
    let prepare = &h.executor.prepare_requests()[0];
    assert_eq!(prepare.amount, 1_497_000_000);
    assert_eq!(prepare.platform_fee, 3_000_000);
    assert_eq!(prepare.taker, WALLET);
    assert_eq!(prepare.request_id.as_deref(), Some(quote.request_id.as_str()));

    let outcome = h.swap.confirm().await.expect("outcome");
    assert!(outcome.is_success());
    assert!(!outcome.signature().unwrap_or_default().is_empty());

    let submit = &h.executor.submit_requests()[0];
    assert_eq!(submit.signed_transaction, format!("signed:{}", prepared.transaction));
    assert_eq!(submit.request_id, quote.request_id);

    assert_eq!(h.swap.phase(), SwapPhase::Succeeded);
    assert_eq!(h.swap.amount(), "");
    assert!(h.swap.quote().is_none());
    assert!(h.swap.prepared().is_none());
    assert_eq!(h.refresher.count(), 1);
    assert!(h.drain().contains(&SwapEvent::Outcome(outcome)));
}

#[tokio::test]
async fn test_expired_blockhash_is_classified() {
    let h = harness();
    h.executor.set_submit_result(Ok(SubmitSwapResponse {
        status: "Failed".to_string(),
        code: Some(-1005),
        error: Some("Transaction failed".to_string()),
        details: Some("Blockhash not found".to_string()),
        ..Default::default()
    }));
    h.quoted_sol_to_usdc("1.5").await;
    h.swap.preview().await.expect("prepared");

    let outcome = h.swap.confirm().await.expect("outcome");

    assert_eq!(outcome, SwapOutcome::failed(FailureReason::ExpiredWindow, None));
    assert_eq!(h.swap.phase(), SwapPhase::Failed);
    assert_eq!(h.swap.amount(), "1.5");
    assert_eq!(h.refresher.count(), 1);
}

#[tokio::test]
async fn test_transport_error_is_classified() {
    let h = harness();
    h.executor
        .set_submit_result(Err("Backend error (400): Transfer: insufficient lamports 10, need 20".to_string()));
    h.quoted_sol_to_usdc("1").await;
    h.swap.preview().await.expect("prepared");

    let outcome = h.swap.confirm().await.expect("outcome");

    assert!(matches!(
        outcome,
        SwapOutcome::Failed { reason: FailureReason::InsufficientBalance, .. }
    ));
    assert_eq!(h.refresher.count(), 1);
}

#[tokio::test]
async fn test_crashed_submission_still_refreshes_balances() {
    let h = harness();
    h.executor.panic_on_submit();
    h.quoted_sol_to_usdc("1").await;
    h.swap.preview().await.expect("prepared");

    let outcome = h.swap.confirm().await.expect("outcome");

    assert_eq!(outcome, SwapOutcome::failed(FailureReason::Generic, None));
    assert_eq!(h.swap.phase(), SwapPhase::Failed);
    assert_eq!(h.refresher.count(), 1);
}

#[tokio::test]
async fn test_prepared_swap_is_submitted_once() {
    let h = harness();
    h.quoted_sol_to_usdc("1").await;
    h.swap.preview().await.expect("prepared");

    h.swap.confirm().await.expect("outcome");
    let second = h.swap.confirm().await;

    assert!(matches!(second, Err(SwapError::InvalidPhase { action: "confirm", .. })));
    assert_eq!(h.executor.submit_requests().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_refreshed_quote_invalidates_prepared_swap() {
    let h = harness();
    h.quoted_sol_to_usdc("1").await;
    let first = h.swap.quote().expect("quote");
    h.swap.preview().await.expect("prepared");

    tokio::time::sleep(Duration::from_secs(301)).await;

    let refreshed = h.swap.quote().expect("quote");
    assert_ne!(refreshed.id, first.id);
    assert!(h.swap.prepared().is_none());
    assert_eq!(h.swap.phase(), SwapPhase::QuoteReady);

    assert!(h.swap.confirm().await.is_err());
    assert!(h.executor.submit_requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_expired_quote_cannot_be_confirmed() {
    let config = SwapConfig {
        quote_ttl: Duration::from_secs(60),
        quote_refresh_interval: Duration::from_secs(3_600),
        ..SwapConfig::default()
    };
    let h = harness_with(config, Some("jwt"));
    h.quoted_sol_to_usdc("1").await;
    h.swap.preview().await.expect("prepared");

    tokio::time::sleep(Duration::from_secs(61)).await;

    assert_eq!(h.swap.confirm().await, Err(SwapError::StaleQuote));
    assert!(h.executor.submit_requests().is_empty());
    assert!(h.swap.prepared().is_none());

    settle().await;
    assert_eq!(h.quotes.requests().len(), 2);
    assert!(h.swap.quote().is_some_and(|quote| !quote.is_expired(Duration::from_secs(60))));
}

#[tokio::test]
async fn test_outcome_after_dismiss_arrives_as_notice() {
    let h = harness();
    h.quoted_sol_to_usdc("1").await;
    h.swap.preview().await.expect("prepared");
    let gate = h.executor.gate_submit();
    h.drain();

    let swap = &h.swap;
    let (outcome, _) = tokio::join!(swap.confirm(), async move {
        settle().await;
        swap.dismiss_results();
        let _ = gate.send(());
    });

    let outcome = outcome.expect("outcome");
    assert!(outcome.is_success());
    let events = h.drain();
    assert!(!events.iter().any(|event| matches!(event, SwapEvent::Outcome(_))));
    assert!(events.iter().any(|event| matches!(
        event,
        SwapEvent::Notice(notice) if notice.message.starts_with("Swap completed")
    )));
}

// endregion: --- Confirm

// region:    --- Notifications

#[tokio::test]
async fn test_balance_notifications_trigger_refresh() {
    let h = harness();
    let hub = NotificationHub::default();
    h.swap.attach_notifications(&hub);

    hub.publish(WalletNotification::BalancesChanged);
    settle().await;
    assert_eq!(h.refresher.count(), 1);

    hub.publish(WalletNotification::Message("Deposit received".to_string()));
    settle().await;
    assert!(h.notices().contains(&"Deposit received".to_string()));

    h.swap.shutdown();
    settle().await;
    assert_eq!(hub.publish(WalletNotification::BalancesChanged), 0);
    assert_eq!(h.refresher.count(), 1);
}

// endregion: --- Notifications
