//! # Swap Tasks
//!
//! Quote fetching and swap submission.

use async_channel::Sender;
use lib_solana::jupiter::OrderRequest;
use shared::SubmitSwapRequest;
use std::sync::{Arc, Weak};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::app::events::{Notice, SwapEvent};
use crate::app::orchestrator::Inner;
use crate::app::outcome::{classify_failure, SwapOutcome};
use crate::app::state::SwapState;
use crate::core::service::{BalanceRefresher, SwapExecutor};

/// What a quote fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuoteTicket {
    pub epoch: u64,
    pub input_mint: String,
    pub output_mint: String,
    pub gross_amount: u64,
    pub platform_fee: u64,
    pub net_amount: u64,
}

impl QuoteTicket {
    /// Still describes the current input.
    pub fn is_current(&self, state: &SwapState) -> bool {
        state.epoch == self.epoch
            && state.pair().is_some_and(|(input, output)| {
                input.mint == self.input_mint && output.mint == self.output_mint
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchOrigin {
    /// Amount or pair changed
    Input,
    /// Background refresh tick
    Refresh,
}

/// Fetch a quote for `ticket` and hand the result to the orchestrator.
///
/// Returns `false` once the orchestrator is gone.
pub(crate) async fn fetch_quote(inner: Weak<Inner>, ticket: QuoteTicket, origin: FetchOrigin) -> bool {
    let (quotes, request) = {
        let Some(inner) = inner.upgrade() else {
            return false;
        };
        inner.debouncer.lock().record_request(Instant::now());
        let request = OrderRequest {
            input_mint: ticket.input_mint.clone(),
            output_mint: ticket.output_mint.clone(),
            amount: ticket.net_amount,
            taker: inner.deps.signer.public_key(),
            slippage_bps: inner.config.slippage_bps,
            gasless: inner.config.gasless,
        };
        (inner.deps.quotes.clone(), request)
    };

    debug!(
        epoch = ticket.epoch,
        origin = ?origin,
        amount = request.amount,
        "Fetching quote"
    );
    let result = quotes.fetch_order(&request).await;

    let Some(inner) = inner.upgrade() else {
        return false;
    };
    inner.apply_quote(&ticket, origin, result);
    true
}

/// Everything a submission needs, detached from the orchestrator.
pub(crate) struct Submission {
    pub attempt_id: Uuid,
    pub request: SubmitSwapRequest,
    pub token: String,
    pub executor: Arc<dyn SwapExecutor>,
    pub balance_refresher: Arc<dyn BalanceRefresher>,
    pub events: Sender<SwapEvent>,
}

/// Submit a signed swap and resolve it into an outcome.
///
/// Balances are refreshed exactly once whatever happens. If the orchestrator is
/// gone the outcome still reaches the host as a notice.
pub(crate) async fn submit_and_resolve(inner: Weak<Inner>, submission: Submission) -> SwapOutcome {
    let Submission {
        attempt_id,
        request,
        token,
        executor,
        balance_refresher,
        events,
    } = submission;

    let outcome = match executor.submit_swap(&request, &token).await {
        Ok(response) => SwapOutcome::from_response(&response),
        Err(e) => {
            warn!(%attempt_id, error = %e, "Swap submission failed");
            SwapOutcome::failed(classify_failure(&e), None)
        }
    };

    match &outcome {
        SwapOutcome::Succeeded { signature } => {
            info!(%attempt_id, signature = %signature, "Swap succeeded");
        }
        SwapOutcome::Failed { reason, signature, .. } => {
            warn!(%attempt_id, reason = %reason, signature = ?signature, "Swap failed");
        }
    }

    balance_refresher.refresh();

    match inner.upgrade() {
        Some(inner) => inner.finish_attempt(&outcome),
        None => {
            let _ = events.try_send(SwapEvent::Notice(Notice::for_outcome(&outcome)));
        }
    }

    outcome
}
