//! # Swap Orchestrator
//!
//! Owns one swap flow: amount entry, debounced quoting, preview (transaction
//! preparation), local signing, submission and the terminal outcome.
//!
//! ## Phases
//!
//! ```text
//! Idle ─► Quoting ─► QuoteReady ─► Previewing ─► Preparing ─► ReadyToConfirm ─► Confirming ─► Succeeded
//!  ▲          │           │                           │               │                  └──────► Failed
//!  └──────────┴───────────┴──── pair change / invalid amount / prepare error ──────────────┘
//! ```
//!
//! Every amount or pair change bumps an epoch; quote results from an older
//! epoch are dropped, so only the most recent request can become the active
//! quote. A prepared transaction is tied to the quote it was built from and is
//! discarded as soon as that quote is superseded or expires.
//!
//! All host-facing output goes over the `SwapEvent` channel. Errors returned
//! from the async operations are also reported there as notices.
//!
//! Methods that schedule work spawn tokio tasks and must be called inside a
//! tokio runtime.

use async_channel::{Receiver, Sender};
use lib_solana::jupiter::OrderResponse;
use lib_utils::amount::{format_units, percent_of, split_platform_fee, truncate_decimals};
use parking_lot::{Mutex, RwLock};
use shared::{truncate_address, PrepareSwapRequest, SubmitSwapRequest};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::app::balances::BalanceCache;
use crate::app::debounce::QuoteDebouncer;
use crate::app::events::{Notice, NoticeLevel, SwapEvent};
use crate::app::outcome::SwapOutcome;
use crate::app::state::{AssetDescriptor, PreparedSwap, Quote, QuoteId, SwapPhase, SwapState};
use crate::app::tasks::swap::{fetch_quote, submit_and_resolve, FetchOrigin, QuoteTicket, Submission};
use crate::config::SwapConfig;
use crate::core::error::{FailureReason, Result, SwapError};
use crate::core::service::{AuthProvider, BalanceRefresher, QuoteService, SwapExecutor, TransactionSigner};
use crate::services::notifications::{NotificationHub, Subscription, WalletNotification};
use crate::services::wallet::WalletError;
use crate::utils::validation::{ensure_sufficient_balance, parse_swap_amount, spendable_balance};

/// Collaborators an orchestrator is built from.
#[derive(Clone)]
pub struct SwapDeps {
    pub quotes: Arc<dyn QuoteService>,
    pub executor: Arc<dyn SwapExecutor>,
    pub signer: Arc<dyn TransactionSigner>,
    pub auth: Arc<dyn AuthProvider>,
    pub balance_refresher: Arc<dyn BalanceRefresher>,
    pub balances: BalanceCache,
}

pub(crate) struct Inner {
    pub(crate) config: SwapConfig,
    pub(crate) deps: SwapDeps,
    pub(crate) state: RwLock<SwapState>,
    pub(crate) debouncer: Mutex<QuoteDebouncer>,
    pub(crate) events: Sender<SwapEvent>,
    subscription: Mutex<Option<Subscription>>,
}

/// One swap flow.
///
/// Dropping the orchestrator aborts its timers and notification listener. A
/// submission already in flight still completes and reports its outcome as a
/// notice.
pub struct SwapOrchestrator {
    inner: Arc<Inner>,
}

impl SwapOrchestrator {
    /// Create an orchestrator reporting to `events`.
    ///
    /// Fails with [`SwapError::WalletLocked`] if the signer has no key loaded.
    pub fn new(config: SwapConfig, deps: SwapDeps, events: Sender<SwapEvent>) -> Result<Self> {
        config.validate().map_err(SwapError::Config)?;
        let wallet = deps.signer.public_key().ok_or(SwapError::WalletLocked)?;

        info!(
            wallet = %truncate_address(&wallet),
            platform_fee_bps = config.platform_fee_bps,
            slippage_bps = config.slippage_bps,
            "Swap orchestrator ready"
        );

        let debouncer = QuoteDebouncer::new(config.min_quote_interval, config.quote_refresh_interval);
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                deps,
                state: RwLock::new(SwapState::default()),
                debouncer: Mutex::new(debouncer),
                events,
                subscription: Mutex::new(None),
            }),
        })
    }

    /// Create an orchestrator together with its event receiver.
    pub fn with_channel(config: SwapConfig, deps: SwapDeps) -> Result<(Self, Receiver<SwapEvent>)> {
        let (tx, rx) = async_channel::unbounded();
        Ok((Self::new(config, deps, tx)?, rx))
    }

    // region:    --- Inputs

    /// Replace the typed amount.
    ///
    /// Extra fractional digits beyond the input asset's decimals are cut off,
    /// never rounded. Schedules a quote when the amount and pair are usable.
    pub fn set_amount(&self, raw: &str) {
        {
            let mut state = self.inner.state.write();
            let raw = raw.trim();
            state.amount = match &state.input_asset {
                Some(asset) => truncate_decimals(raw, asset.decimals),
                None => raw.to_string(),
            };
        }
        self.inner.requote();
    }

    /// Fill the amount with `percent` (1 to 100) of the cached input balance.
    ///
    /// For native SOL the network fee buffer is never included.
    pub fn set_amount_percent(&self, percent: u8) -> Result<String> {
        if percent == 0 || percent > 100 {
            return Err(SwapError::Validation("Percentage must be between 1 and 100".to_string()));
        }

        let input = self
            .input_asset()
            .ok_or_else(|| SwapError::Validation("Select a token to swap".to_string()))?;
        let balance = self.inner.deps.balances.get(&input.mint).unwrap_or(0);
        let spendable = spendable_balance(&input, balance, self.inner.config.sol_fee_buffer_lamports);
        let units = percent_of(balance, percent).min(spendable);

        let amount = format_units(units, input.decimals);
        self.set_amount(&amount);
        Ok(amount)
    }

    /// Select the asset to sell. Picking the current output flips the pair.
    pub fn select_input_asset(&self, asset: AssetDescriptor) {
        {
            let mut state = self.inner.state.write();
            if state.input_asset.as_ref() == Some(&asset) {
                return;
            }
            if state.output_asset.as_ref() == Some(&asset) {
                state.output_asset = state.input_asset.take();
            }
            state.amount = truncate_decimals(&state.amount, asset.decimals);
            state.input_asset = Some(asset);
        }
        self.inner.requote();
    }

    /// Select the asset to buy. Picking the current input flips the pair.
    pub fn select_output_asset(&self, asset: AssetDescriptor) {
        {
            let mut state = self.inner.state.write();
            if state.output_asset.as_ref() == Some(&asset) {
                return;
            }
            if state.input_asset.as_ref() == Some(&asset) {
                state.input_asset = state.output_asset.take();
                if let Some(input) = &state.input_asset {
                    state.amount = truncate_decimals(&state.amount, input.decimals);
                }
            }
            state.output_asset = Some(asset);
        }
        self.inner.requote();
    }

    /// Swap input and output assets.
    pub fn flip_assets(&self) {
        {
            let mut state = self.inner.state.write();
            let state = &mut *state;
            std::mem::swap(&mut state.input_asset, &mut state.output_asset);
            if let Some(input) = &state.input_asset {
                state.amount = truncate_decimals(&state.amount, input.decimals);
            }
        }
        self.inner.requote();
    }

    // endregion: --- Inputs

    // region:    --- Execution

    /// Build the unsigned transaction for the active quote.
    ///
    /// Checks run before any network call: phase, amount, quote freshness,
    /// balance (with the SOL fee buffer), credentials. A failed preparation
    /// returns the flow to idle and re-quotes the unchanged amount.
    pub async fn preview(&self) -> Result<PreparedSwap> {
        let (request, token, quote_id) = match self.begin_preview() {
            Ok(ready) => ready,
            Err(err) => {
                self.inner.notify(Notice::error(err.user_message()));
                if err == SwapError::StaleQuote {
                    self.inner.requote_if_stale();
                }
                return Err(err);
            }
        };

        let result = self.inner.deps.executor.prepare_swap(&request, &token).await;

        let mut state = self.inner.state.write();
        let still_current = state.phase == SwapPhase::Preparing
            && state.quote.as_ref().map(|quote| quote.id) == Some(quote_id);
        if !still_current {
            info!(quote_id = %quote_id, "Discarding preparation for a superseded quote");
            if state.phase == SwapPhase::Preparing {
                let next = if state.quote.is_some() { SwapPhase::QuoteReady } else { SwapPhase::Idle };
                self.inner.set_phase(&mut state, next);
                self.inner.notify(Notice::info(SwapError::StaleQuote.user_message()));
            }
            return Err(SwapError::StaleQuote);
        }

        match result {
            Ok(response) => {
                let request_id = if response.request_id.is_empty() {
                    request.request_id.clone().unwrap_or_default()
                } else {
                    response.request_id
                };
                let prepared = PreparedSwap {
                    quote_id,
                    request_id,
                    transaction: response.transaction,
                    platform_fee: request.platform_fee,
                    last_valid_block_height: response.last_valid_block_height,
                };
                info!(quote_id = %quote_id, request_id = %prepared.request_id, "Swap ready to confirm");
                state.prepared = Some(prepared.clone());
                self.inner.set_phase(&mut state, SwapPhase::ReadyToConfirm);
                self.inner.emit(SwapEvent::Prepared(prepared.clone()));
                Ok(prepared)
            }
            Err(e) => {
                error!(quote_id = %quote_id, error = %e, "Swap preparation failed");
                let err = SwapError::Prepare(e);
                self.inner.set_phase(&mut state, SwapPhase::Idle);
                self.inner.notify(Notice::error(err.user_message()));
                drop(state);
                self.inner.requote();
                Err(err)
            }
        }
    }

    fn begin_preview(&self) -> Result<(PrepareSwapRequest, String, QuoteId)> {
        let inner = &self.inner;
        let mut state = inner.state.write();

        match state.phase {
            SwapPhase::QuoteReady | SwapPhase::Failed => {}
            phase => return Err(SwapError::InvalidPhase { action: "preview", phase }),
        }

        let (input, output) = state
            .pair()
            .map(|(input, output)| (input.clone(), output.clone()))
            .ok_or_else(|| SwapError::Validation("Select tokens to swap".to_string()))?;
        let gross = parse_swap_amount(&state.amount, &input)?;

        let quote = state.quote.clone().ok_or(SwapError::NoQuote)?;
        if !quote.matches_pair(&input.mint, &output.mint)
            || quote.gross_amount != gross
            || quote.is_expired(inner.config.quote_ttl)
        {
            return Err(SwapError::StaleQuote);
        }

        ensure_sufficient_balance(
            &input,
            gross,
            inner.deps.balances.get(&input.mint),
            inner.config.sol_fee_buffer_lamports,
        )?;

        let token = inner.deps.auth.bearer_token().ok_or(SwapError::NotAuthenticated)?;
        let taker = inner.deps.signer.public_key().ok_or(SwapError::WalletLocked)?;

        state.results_visible = true;
        inner.set_phase(&mut state, SwapPhase::Previewing);

        let request = PrepareSwapRequest {
            input_mint: quote.input_mint.clone(),
            output_mint: quote.output_mint.clone(),
            amount: quote.in_amount,
            platform_fee: quote.platform_fee,
            taker,
            slippage_bps: quote.slippage_bps,
            request_id: Some(quote.request_id.clone()).filter(|id| !id.is_empty()),
        };

        inner.set_phase(&mut state, SwapPhase::Preparing);
        debug!(quote_id = %quote.id, amount = request.amount, fee = request.platform_fee, "Preparing swap");
        Ok((request, token, quote.id))
    }

    /// Sign the prepared transaction locally, submit it and wait for the outcome.
    ///
    /// The prepared swap is consumed; it can never be submitted twice. The
    /// submission runs in its own task, so it completes even if this future
    /// is dropped. Balances are refreshed once after every attempt.
    pub async fn confirm(&self) -> Result<SwapOutcome> {
        let submission = match self.begin_confirm() {
            Ok(submission) => submission,
            Err(err) => {
                self.inner.notify(Notice::error(err.user_message()));
                if err == SwapError::StaleQuote {
                    self.inner.requote_if_stale();
                }
                return Err(err);
            }
        };

        let attempt_id = submission.attempt_id;
        let task = tokio::spawn(submit_and_resolve(Arc::downgrade(&self.inner), submission));
        match task.await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!(%attempt_id, error = %e, "Swap submission task ended abnormally");
                let outcome = SwapOutcome::failed(FailureReason::Generic, None);
                self.inner.deps.balance_refresher.refresh();
                self.inner.finish_attempt(&outcome);
                Ok(outcome)
            }
        }
    }

    fn begin_confirm(&self) -> Result<Submission> {
        let inner = &self.inner;
        let mut state = inner.state.write();

        if state.phase != SwapPhase::ReadyToConfirm {
            return Err(SwapError::InvalidPhase { action: "confirm", phase: state.phase });
        }
        let Some(prepared) = state.prepared.clone() else {
            inner.set_phase(&mut state, SwapPhase::QuoteReady);
            return Err(SwapError::StaleQuote);
        };

        let active = state
            .quote
            .as_ref()
            .is_some_and(|quote| quote.id == prepared.quote_id && !quote.is_expired(inner.config.quote_ttl));
        if !active {
            warn!(quote_id = %prepared.quote_id, "Prepared swap no longer matches the active quote");
            state.prepared = None;
            let next = if state.quote.is_some() { SwapPhase::QuoteReady } else { SwapPhase::Idle };
            inner.set_phase(&mut state, next);
            return Err(SwapError::StaleQuote);
        }

        let token = inner.deps.auth.bearer_token().ok_or(SwapError::NotAuthenticated)?;

        let signed = match inner.deps.signer.sign_transaction(&prepared.transaction) {
            Ok(signed) => signed,
            Err(WalletError::Locked) => return Err(SwapError::WalletLocked),
            Err(e) => {
                error!(error = %e, "Signing failed");
                state.prepared = None;
                inner.set_phase(&mut state, SwapPhase::QuoteReady);
                return Err(e.into());
            }
        };

        state.prepared = None;
        inner.set_phase(&mut state, SwapPhase::Confirming);

        let attempt_id = Uuid::new_v4();
        info!(%attempt_id, quote_id = %prepared.quote_id, request_id = %prepared.request_id, "Submitting swap");

        Ok(Submission {
            attempt_id,
            request: SubmitSwapRequest {
                signed_transaction: signed,
                request_id: prepared.request_id,
            },
            token,
            executor: inner.deps.executor.clone(),
            balance_refresher: inner.deps.balance_refresher.clone(),
            events: inner.events.clone(),
        })
    }

    /// Close the review step and drop the prepared transaction.
    pub fn cancel_preview(&self) -> Result<()> {
        let mut state = self.inner.state.write();
        match state.phase {
            SwapPhase::Previewing | SwapPhase::Preparing | SwapPhase::ReadyToConfirm => {
                state.prepared = None;
                state.results_visible = false;
                let next = if state.quote.is_some() { SwapPhase::QuoteReady } else { SwapPhase::Idle };
                self.inner.set_phase(&mut state, next);
                Ok(())
            }
            phase => Err(SwapError::InvalidPhase { action: "cancel preview", phase }),
        }
    }

    /// The host closed the results view.
    ///
    /// Any prepared transaction is dropped; an outcome still pending arrives as
    /// a notice instead of an `Outcome` event.
    pub fn dismiss_results(&self) {
        let mut state = self.inner.state.write();
        state.results_visible = false;
        if state.prepared.take().is_some() {
            debug!("Prepared swap discarded on dismiss");
        }
        if matches!(
            state.phase,
            SwapPhase::Previewing | SwapPhase::Preparing | SwapPhase::ReadyToConfirm
        ) {
            let next = if state.quote.is_some() { SwapPhase::QuoteReady } else { SwapPhase::Idle };
            self.inner.set_phase(&mut state, next);
        }
    }

    // endregion: --- Execution

    // region:    --- Lifecycle

    /// Reload balances whenever the wallet reports a change.
    ///
    /// Replaces any previous subscription. The listener is aborted on shutdown.
    pub fn attach_notifications(&self, hub: &NotificationHub) {
        let refresher = self.inner.deps.balance_refresher.clone();
        let events = self.inner.events.clone();
        let subscription = hub.listen(move |notification| match notification {
            WalletNotification::BalancesChanged => refresher.refresh(),
            WalletNotification::SwapSettled { signature } => {
                refresher.refresh();
                let notice = Notice::new(
                    NoticeLevel::Success,
                    format!("Swap settled: {}", truncate_address(&signature)),
                );
                let _ = events.try_send(SwapEvent::Notice(notice));
            }
            WalletNotification::Message(message) => {
                let _ = events.try_send(SwapEvent::Notice(Notice::info(message)));
            }
        });
        *self.inner.subscription.lock() = Some(subscription);
    }

    /// Abort timers and the notification listener.
    pub fn shutdown(&self) {
        self.inner.debouncer.lock().cancel_all();
        if self.inner.subscription.lock().take().is_some() {
            debug!("Notification listener stopped");
        }
    }

    // endregion: --- Lifecycle

    // region:    --- Accessors

    pub fn phase(&self) -> SwapPhase {
        self.inner.state.read().phase
    }

    pub fn amount(&self) -> String {
        self.inner.state.read().amount.clone()
    }

    pub fn quote(&self) -> Option<Quote> {
        self.inner.state.read().quote.clone()
    }

    pub fn prepared(&self) -> Option<PreparedSwap> {
        self.inner.state.read().prepared.clone()
    }

    pub fn input_asset(&self) -> Option<AssetDescriptor> {
        self.inner.state.read().input_asset.clone()
    }

    pub fn output_asset(&self) -> Option<AssetDescriptor> {
        self.inner.state.read().output_asset.clone()
    }

    pub fn last_outcome(&self) -> Option<SwapOutcome> {
        self.inner.state.read().last_outcome.clone()
    }

    /// Copy of the whole state.
    pub fn snapshot(&self) -> SwapState {
        self.inner.state.read().clone()
    }

    /// `(platform_fee, net_amount)` for the typed amount.
    pub fn fee_breakdown(&self) -> Option<(u64, u64)> {
        let state = self.inner.state.read();
        let input = state.input_asset.as_ref()?;
        let gross = parse_swap_amount(&state.amount, input).ok()?;
        Some(split_platform_fee(gross, self.inner.config.platform_fee_bps))
    }

    pub fn config(&self) -> &SwapConfig {
        &self.inner.config
    }

    // endregion: --- Accessors
}

impl Drop for SwapOrchestrator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Inner {
    pub(crate) fn emit(&self, event: SwapEvent) {
        if self.events.try_send(event).is_err() {
            debug!("Swap event dropped, receiver closed");
        }
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.emit(SwapEvent::Notice(notice));
    }

    fn set_phase(&self, state: &mut SwapState, phase: SwapPhase) {
        if state.phase != phase {
            debug!(from = %state.phase, to = %phase, "Phase change");
            state.phase = phase;
            self.emit(SwapEvent::PhaseChanged(phase));
        }
    }

    /// Clear the active quote and anything prepared from it.
    fn clear_quote(&self, state: &mut SwapState) {
        if state.prepared.take().is_some() {
            debug!("Prepared swap discarded with its quote");
        }
        if state.quote.take().is_some() {
            self.emit(SwapEvent::QuoteUpdated(None));
        }
    }

    fn ticket_for(&self, state: &SwapState) -> Option<QuoteTicket> {
        let (input, output) = state.pair()?;
        if input.mint == output.mint {
            return None;
        }
        let gross = parse_swap_amount(&state.amount, input).ok()?;
        let (platform_fee, net_amount) = split_platform_fee(gross, self.config.platform_fee_bps);
        if net_amount == 0 {
            return None;
        }
        Some(QuoteTicket {
            epoch: state.epoch,
            input_mint: input.mint.clone(),
            output_mint: output.mint.clone(),
            gross_amount: gross,
            platform_fee,
            net_amount,
        })
    }

    /// Input changed: drop timers and the quote, then schedule a new fetch.
    pub(crate) fn requote(self: &Arc<Self>) {
        let mut debouncer = self.debouncer.lock();
        debouncer.cancel_all();

        let mut state = self.state.write();
        state.epoch += 1;
        self.clear_quote(&mut state);

        let confirming = state.phase == SwapPhase::Confirming;
        let Some(ticket) = self.ticket_for(&state) else {
            if !confirming {
                self.set_phase(&mut state, SwapPhase::Idle);
            }
            return;
        };
        if !confirming {
            self.set_phase(&mut state, SwapPhase::Quoting);
        }

        let now = Instant::now();
        let delay = debouncer.delay_at(now);
        debug!(
            epoch = ticket.epoch,
            gross = ticket.gross_amount,
            fee = ticket.platform_fee,
            delay_ms = delay.as_millis() as u64,
            "Scheduling quote"
        );
        if delay.is_zero() {
            debouncer.record_request(now);
        }
        let weak = Arc::downgrade(self);
        debouncer.schedule(delay, async move {
            fetch_quote(weak, ticket, FetchOrigin::Input).await;
        });
    }

    /// Re-quote when the active quote is missing or past its TTL.
    fn requote_if_stale(self: &Arc<Self>) {
        let stale = {
            let state = self.state.read();
            state
                .quote
                .as_ref()
                .map_or(true, |quote| quote.is_expired(self.config.quote_ttl))
        };
        if stale {
            self.requote();
        }
    }

    /// Apply the result of a quote fetch issued for `ticket`.
    pub(crate) fn apply_quote(
        self: &Arc<Self>,
        ticket: &QuoteTicket,
        origin: FetchOrigin,
        result: std::result::Result<OrderResponse, String>,
    ) {
        let mut debouncer = self.debouncer.lock();
        let mut state = self.state.write();

        if !ticket.is_current(&state) {
            debug!(epoch = ticket.epoch, current = state.epoch, "Dropping stale quote result");
            return;
        }

        let order = match result {
            Ok(order) if order.is_tradeable() => order,
            Ok(order) => {
                warn!(
                    error_code = ?order.error_code,
                    error = ?order.error,
                    "Routing service returned no usable quote"
                );
                self.drop_quote(&mut state, SwapError::NoQuote.user_message());
                return;
            }
            Err(e) => {
                error!(error = %e, "Quote fetch failed");
                self.drop_quote(&mut state, SwapError::Quote(e).user_message());
                return;
            }
        };

        if order.in_amount_units() != Some(ticket.net_amount) {
            warn!(
                expected = ticket.net_amount,
                in_amount = %order.in_amount,
                "Routing service quoted a different input amount"
            );
            self.drop_quote(&mut state, SwapError::NoQuote.user_message());
            return;
        }

        let quote = Quote {
            id: state.assign_quote_id(),
            input_mint: ticket.input_mint.clone(),
            output_mint: ticket.output_mint.clone(),
            gross_amount: ticket.gross_amount,
            platform_fee: ticket.platform_fee,
            in_amount: ticket.net_amount,
            out_amount: order.out_amount_units().unwrap_or_default(),
            slippage_bps: if order.slippage_bps > 0 { order.slippage_bps } else { self.config.slippage_bps },
            price_impact_pct: order.price_impact_pct,
            request_id: order.request_id,
            fetched_at: Instant::now(),
        };
        debouncer.record_success(quote.fetched_at);

        if state.prepared.take().is_some() {
            info!(quote_id = %quote.id, "Quote refreshed, prepared swap discarded");
            self.notify(Notice::info(SwapError::StaleQuote.user_message()));
        }
        match state.phase {
            SwapPhase::Idle | SwapPhase::Quoting | SwapPhase::QuoteReady | SwapPhase::ReadyToConfirm => {
                self.set_phase(&mut state, SwapPhase::QuoteReady);
            }
            _ => {}
        }

        info!(
            quote_id = %quote.id,
            in_amount = quote.in_amount,
            out_amount = quote.out_amount,
            price_impact = quote.price_impact_pct,
            "Quote ready"
        );
        state.quote = Some(quote.clone());
        self.emit(SwapEvent::QuoteUpdated(Some(quote)));

        if origin == FetchOrigin::Input {
            let weak = Arc::downgrade(self);
            let ticket = ticket.clone();
            debouncer.start_refresh(move || fetch_quote(weak.clone(), ticket.clone(), FetchOrigin::Refresh));
        }
    }

    fn drop_quote(&self, state: &mut SwapState, message: String) {
        self.clear_quote(state);
        if matches!(
            state.phase,
            SwapPhase::Quoting | SwapPhase::QuoteReady | SwapPhase::ReadyToConfirm
        ) {
            self.set_phase(state, SwapPhase::Idle);
        }
        self.notify(Notice::error(message));
    }

    /// Record the outcome of a submission and tell the host.
    pub(crate) fn finish_attempt(&self, outcome: &SwapOutcome) {
        let mut debouncer = self.debouncer.lock();
        let mut state = self.state.write();

        state.last_outcome = Some(outcome.clone());
        state.prepared = None;

        if outcome.is_success() {
            debouncer.cancel_all();
            state.epoch += 1;
            state.amount.clear();
            self.clear_quote(&mut state);
            self.set_phase(&mut state, SwapPhase::Succeeded);
        } else {
            self.set_phase(&mut state, SwapPhase::Failed);
        }

        if state.results_visible {
            self.emit(SwapEvent::Outcome(outcome.clone()));
        } else {
            self.notify(Notice::for_outcome(outcome));
        }
    }
}
