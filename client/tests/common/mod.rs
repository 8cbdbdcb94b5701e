//! In-memory collaborators for driving the orchestrator in tests.

#![allow(dead_code)]

use async_channel::Receiver;
use async_trait::async_trait;
use lib_solana::jupiter::{OrderRequest, OrderResponse};
use lib_solana::tokens::{SOL_MINT, USDC_MINT, USDT_MINT};
use parking_lot::Mutex;
use shared::{PrepareSwapRequest, PrepareSwapResponse, SubmitSwapRequest, SubmitSwapResponse};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use swap_client::app::{AssetDescriptor, BalanceCache, SwapDeps, SwapEvent, SwapOrchestrator};
use swap_client::config::SwapConfig;
use swap_client::core::service::{AuthProvider, BalanceRefresher, QuoteService, SwapExecutor, TransactionSigner};
use swap_client::services::wallet::WalletError;
use tokio::sync::oneshot;

pub const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

pub fn sol() -> AssetDescriptor {
    AssetDescriptor::new(SOL_MINT, "SOL", 9)
}

pub fn usdc() -> AssetDescriptor {
    AssetDescriptor::new(USDC_MINT, "USDC", 6)
}

pub fn usdt() -> AssetDescriptor {
    AssetDescriptor::new(USDT_MINT, "USDT", 6)
}

/// Let spawned tasks run.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

// region:    --- Quote service

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    Ok,
    NetworkError,
    ErrorCoded,
    /// Router fills less than was asked for
    PartialInput,
}

pub struct FakeQuotes {
    requests: Mutex<Vec<OrderRequest>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    mode: Mutex<QuoteMode>,
}

impl FakeQuotes {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            mode: Mutex::new(QuoteMode::Ok),
        }
    }

    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().clone()
    }

    pub fn set_mode(&self, mode: QuoteMode) {
        *self.mode.lock() = mode;
    }

    /// Hold the next request until the returned sender fires.
    pub fn gate_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock() = Some(rx);
        tx
    }
}

#[async_trait]
impl QuoteService for FakeQuotes {
    async fn fetch_order(&self, request: &OrderRequest) -> Result<OrderResponse, String> {
        let number = {
            let mut requests = self.requests.lock();
            requests.push(request.clone());
            requests.len()
        };
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let mode = *self.mode.lock();
        let mut order = OrderResponse {
            input_mint: request.input_mint.clone(),
            output_mint: request.output_mint.clone(),
            in_amount: request.amount.to_string(),
            out_amount: (request.amount / 7 + 1).to_string(),
            slippage_bps: request.slippage_bps,
            price_impact_pct: 0.01,
            request_id: format!("req-{}", number),
            transaction: None,
            error_code: None,
            error: None,
        };
        match mode {
            QuoteMode::Ok => Ok(order),
            QuoteMode::NetworkError => Err("Network error: connection refused".to_string()),
            QuoteMode::PartialInput => {
                order.in_amount = (request.amount - 1).to_string();
                Ok(order)
            }
            QuoteMode::ErrorCoded => {
                order.error_code = Some(3);
                order.error = Some("Insufficient funds".to_string());
                Ok(order)
            }
        }
    }
}

// endregion: --- Quote service

// region:    --- Executor

pub struct FakeExecutor {
    prepare_requests: Mutex<Vec<PrepareSwapRequest>>,
    submit_requests: Mutex<Vec<SubmitSwapRequest>>,
    prepare_result: Mutex<Result<PrepareSwapResponse, String>>,
    submit_result: Mutex<Result<SubmitSwapResponse, String>>,
    submit_gate: Mutex<Option<oneshot::Receiver<()>>>,
    panic_on_submit: AtomicBool,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self {
            prepare_requests: Mutex::new(Vec::new()),
            submit_requests: Mutex::new(Vec::new()),
            prepare_result: Mutex::new(Ok(PrepareSwapResponse {
                transaction: "dW5zaWduZWQ=".to_string(),
                request_id: String::new(),
                last_valid_block_height: Some(1_000),
            })),
            submit_result: Mutex::new(Ok(SubmitSwapResponse {
                status: "Success".to_string(),
                signature: Some("5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW".to_string()),
                ..Default::default()
            })),
            submit_gate: Mutex::new(None),
            panic_on_submit: AtomicBool::new(false),
        }
    }

    pub fn prepare_requests(&self) -> Vec<PrepareSwapRequest> {
        self.prepare_requests.lock().clone()
    }

    pub fn submit_requests(&self) -> Vec<SubmitSwapRequest> {
        self.submit_requests.lock().clone()
    }

    pub fn fail_prepare(&self, error: &str) {
        *self.prepare_result.lock() = Err(error.to_string());
    }

    pub fn set_submit_result(&self, result: Result<SubmitSwapResponse, String>) {
        *self.submit_result.lock() = result;
    }

    /// Make the next submission blow up inside its task.
    pub fn panic_on_submit(&self) {
        self.panic_on_submit.store(true, Ordering::SeqCst);
    }

    pub fn gate_submit(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.submit_gate.lock() = Some(rx);
        tx
    }
}

#[async_trait]
impl SwapExecutor for FakeExecutor {
    async fn prepare_swap(
        &self,
        request: &PrepareSwapRequest,
        _jwt_token: &str,
    ) -> Result<PrepareSwapResponse, String> {
        self.prepare_requests.lock().push(request.clone());
        self.prepare_result.lock().clone()
    }

    async fn submit_swap(
        &self,
        request: &SubmitSwapRequest,
        _jwt_token: &str,
    ) -> Result<SubmitSwapResponse, String> {
        self.submit_requests.lock().push(request.clone());
        if self.panic_on_submit.load(Ordering::SeqCst) {
            panic!("executor crashed");
        }
        let gate = self.submit_gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.submit_result.lock().clone()
    }
}

// endregion: --- Executor

// region:    --- Signer, auth, balances

pub struct FakeSigner {
    key: Option<String>,
}

impl FakeSigner {
    pub fn unlocked() -> Self {
        Self { key: Some(WALLET.to_string()) }
    }

    pub fn locked() -> Self {
        Self { key: None }
    }
}

impl TransactionSigner for FakeSigner {
    fn public_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn sign_transaction(&self, unsigned_b64: &str) -> Result<String, WalletError> {
        match &self.key {
            Some(_) => Ok(format!("signed:{}", unsigned_b64)),
            None => Err(WalletError::Locked),
        }
    }
}

pub struct FakeAuth(pub Option<String>);

impl AuthProvider for FakeAuth {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct CountingRefresher {
    count: AtomicUsize,
}

impl CountingRefresher {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl BalanceRefresher for CountingRefresher {
    fn refresh(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// endregion: --- Signer, auth, balances

// region:    --- Harness

pub struct Harness {
    pub swap: SwapOrchestrator,
    pub events: Receiver<SwapEvent>,
    pub quotes: Arc<FakeQuotes>,
    pub executor: Arc<FakeExecutor>,
    pub refresher: Arc<CountingRefresher>,
    pub balances: BalanceCache,
}

pub struct Fakes {
    pub quotes: Arc<FakeQuotes>,
    pub executor: Arc<FakeExecutor>,
    pub refresher: Arc<CountingRefresher>,
    pub balances: BalanceCache,
}

impl Fakes {
    pub fn new() -> Self {
        Self {
            quotes: Arc::new(FakeQuotes::new()),
            executor: Arc::new(FakeExecutor::new()),
            refresher: Arc::new(CountingRefresher::default()),
            balances: BalanceCache::new(),
        }
    }

    pub fn deps(&self, signer: FakeSigner, token: Option<&str>) -> SwapDeps {
        SwapDeps {
            quotes: self.quotes.clone(),
            executor: self.executor.clone(),
            signer: Arc::new(signer),
            auth: Arc::new(FakeAuth(token.map(str::to_string))),
            balance_refresher: self.refresher.clone(),
            balances: self.balances.clone(),
        }
    }
}

pub fn harness() -> Harness {
    harness_with(SwapConfig::default(), Some("jwt"))
}

pub fn harness_with(config: SwapConfig, token: Option<&str>) -> Harness {
    let fakes = Fakes::new();
    let deps = fakes.deps(FakeSigner::unlocked(), token);
    let (swap, events) = SwapOrchestrator::with_channel(config, deps).expect("orchestrator");
    Harness {
        swap,
        events,
        quotes: fakes.quotes,
        executor: fakes.executor,
        refresher: fakes.refresher,
        balances: fakes.balances,
    }
}

impl Harness {
    /// SOL -> USDC with `amount` typed and 10 SOL available.
    pub async fn quoted_sol_to_usdc(&self, amount: &str) {
        self.balances.set(SOL_MINT, 10_000_000_000);
        self.swap.select_input_asset(sol());
        self.swap.select_output_asset(usdc());
        self.swap.set_amount(amount);
        settle().await;
    }

    pub fn drain(&self) -> Vec<SwapEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    pub fn notices(&self) -> Vec<String> {
        self.drain()
            .into_iter()
            .filter_map(|event| match event {
                SwapEvent::Notice(notice) => Some(notice.message),
                _ => None,
            })
            .collect()
    }
}

// endregion: --- Harness
