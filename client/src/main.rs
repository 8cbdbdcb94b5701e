//! # Swap Client - Headless Driver
//!
//! Runs one swap from the command line with the production collaborators.
//!
//! ```bash
//! WALLET_KEYPAIR=<base58 or [..] bytes> API_TOKEN=<jwt> \
//!     swap-client SOL USDC 1.5            # quote only
//! swap-client SOL USDC 50% --execute      # quote, prepare, sign, submit
//! ```

use anyhow::{anyhow, bail, Context};
use lib_solana::JupiterClient;
use std::sync::Arc;
use std::time::Duration;
use swap_client::app::{
    ApiBalanceRefresher, AssetCatalog, AssetDescriptor, BalanceCache, Notice, NoticeLevel, SwapDeps,
    SwapEvent, SwapOrchestrator, SwapOutcome,
};
use swap_client::config::ClientConfig;
use swap_client::services::{ApiClient, AuthSession, WalletSession};

const QUOTE_WAIT: Duration = Duration::from_secs(30);

struct Args {
    from: String,
    to: String,
    amount: String,
    execute: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut execute = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--execute" => execute = true,
            "-h" | "--help" => {
                bail!("usage: swap-client <FROM> <TO> <AMOUNT|25%|50%|max> [--execute]")
            }
            _ => positional.push(arg),
        }
    }
    let [from, to, amount]: [String; 3] = positional
        .try_into()
        .map_err(|_| anyhow!("usage: swap-client <FROM> <TO> <AMOUNT|25%|50%|max> [--execute]"))?;
    Ok(Args { from, to, amount, execute })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = swap_client::debug::logger::init();

    let args = parse_args()?;
    let config = ClientConfig::from_env().map_err(anyhow::Error::msg)?;
    config.validate().map_err(anyhow::Error::msg)?;

    let wallet = Arc::new(WalletSession::new());
    let secret = lib_utils::get_env("WALLET_KEYPAIR").context("WALLET_KEYPAIR must be set")?;
    let address = wallet.unlock_from_secret(&secret)?;
    println!("Wallet: {}", shared::truncate_address(&address));

    let auth = Arc::new(AuthSession::new());
    if let Ok(token) = lib_utils::get_env("API_TOKEN") {
        auth.set_token(token);
    }

    let api = Arc::new(ApiClient::new(&config.api_base_url, config.http_timeout));
    let jupiter = JupiterClient::builder()
        .timeout(config.http_timeout)
        .quote_api_base(&config.quote_api_base)
        .build()?;

    let mut catalog = AssetCatalog::new();
    let from = resolve_asset(&mut catalog, &jupiter, &args.from).await?;
    let to = resolve_asset(&mut catalog, &jupiter, &args.to).await?;

    let balances = BalanceCache::new();
    let refresher = Arc::new(ApiBalanceRefresher::new(
        api.clone(),
        wallet.clone(),
        auth.clone(),
        balances.clone(),
    ));
    if let Err(e) = refresher.refresh_now().await {
        tracing::warn!(error = %e, "Initial balance load failed");
        println!("Warning: balances unavailable ({})", e);
    }

    let deps = SwapDeps {
        quotes: Arc::new(jupiter),
        executor: api.clone(),
        signer: wallet.clone(),
        auth: auth.clone(),
        balance_refresher: refresher,
        balances: balances.clone(),
    };
    let (swap, events) = SwapOrchestrator::with_channel(config.swap.clone(), deps)?;

    swap.select_input_asset(from.clone());
    swap.select_output_asset(to.clone());
    match args.amount.to_ascii_lowercase().as_str() {
        "max" => {
            swap.set_amount_percent(100)?;
        }
        pct if pct.ends_with('%') => {
            let percent: u8 = pct.trim_end_matches('%').parse().context("invalid percentage")?;
            swap.set_amount_percent(percent)?;
        }
        amount => swap.set_amount(amount),
    }
    println!("Swapping {} {} for {}", swap.amount(), from.symbol, to.symbol);

    let quote = tokio::time::timeout(QUOTE_WAIT, async {
        while let Ok(event) = events.recv().await {
            match event {
                SwapEvent::QuoteUpdated(Some(quote)) => return Ok(quote),
                SwapEvent::Notice(notice) if notice.level == NoticeLevel::Error => {
                    return Err(anyhow!(notice.message));
                }
                other => tracing::debug!(event = ?other, "Event"),
            }
        }
        Err(anyhow!("event channel closed"))
    })
    .await
    .context("timed out waiting for a quote")??;

    println!(
        "Quote {}: {} {} -> {} {} (min {}, fee {} {}, impact {:.4}%)",
        quote.id,
        from.format(quote.gross_amount),
        from.symbol,
        to.format(quote.out_amount),
        to.symbol,
        to.format(quote.min_received()),
        from.format(quote.platform_fee),
        from.symbol,
        quote.price_impact_pct,
    );

    if !args.execute {
        println!("Dry run, pass --execute to swap");
        swap.shutdown();
        return Ok(());
    }

    let prepared = swap.preview().await?;
    println!("Prepared transaction for request {}", prepared.request_id);

    let outcome = swap.confirm().await?;
    match &outcome {
        SwapOutcome::Succeeded { signature } => println!("Swap succeeded: {}", signature),
        SwapOutcome::Failed { reason, message, .. } => println!("Swap failed ({}): {}", reason, message),
    }

    drain_notices(&events);
    swap.shutdown();
    Ok(())
}

/// Resolve a symbol or mint, loading the routing token list when needed.
async fn resolve_asset(
    catalog: &mut AssetCatalog,
    jupiter: &JupiterClient,
    mint_or_symbol: &str,
) -> anyhow::Result<AssetDescriptor> {
    if let Some(asset) = catalog.resolve(mint_or_symbol) {
        return Ok(asset.clone());
    }
    let tokens = jupiter.get_token_list().await?;
    let added = catalog.extend_from_token_list(&tokens);
    tracing::info!(added, "Token list merged into catalog");
    catalog
        .resolve(mint_or_symbol)
        .cloned()
        .ok_or_else(|| anyhow!("unknown token: {}", mint_or_symbol))
}

fn drain_notices(events: &async_channel::Receiver<SwapEvent>) {
    while let Ok(event) = events.try_recv() {
        if let SwapEvent::Notice(Notice { message, .. }) = event {
            println!("{}", message);
        }
    }
}
