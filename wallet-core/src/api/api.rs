// wallet-core/src/api/api.rs
//
// Public facade: mỗi hàm nhận config + input dạng owned (dễ bind sang FFI),
// tự dựng HTTP client và gọi xuống core.

use crate::chains::sui::{SuiAddress, SUI_DECIMALS};
use crate::chains::sui::{PreparedTransfer, TransferPipeline, TransferRequest, TransferResult};
use crate::config::WalletConfig;
use crate::crypto::{KeyDeriver, KeyNormalizer, MultiChainIdentity};
use crate::error::{WalletError, WalletResult};
use crate::network::{
    Balance, HistoryCursors, HistoryFilter, HistoryPage, HttpTransport, SuiClient, SuiProvider,
    TransactionHistory,
};
use tracing_subscriber::EnvFilter;

pub use crate::chains::utxo::{generate_new_id, hash_id, tmp_id, FloIdentity};

// Core Initialization
/// Install the global `tracing` subscriber. Calling it again is a no-op.
pub fn init_core(config: &WalletConfig) -> WalletResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| WalletError::Validation(format!("Invalid log filter: {}", e)))?,
    };

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    tracing::info!(rpc_url = %config.rpc_url, "wallet core initialised");
    Ok(())
}

fn client(config: &WalletConfig) -> WalletResult<SuiClient<HttpTransport>> {
    Ok(SuiClient::new(HttpTransport::from_config(config)?))
}

fn pipeline(config: &WalletConfig) -> WalletResult<TransferPipeline<SuiClient<HttpTransport>>> {
    Ok(TransferPipeline::new(client(config)?)
        .with_gas_budget(config.gas_budget)
        .with_normalizer(config.normalizer()))
}

// --- Key Management ---

/// BTC / FLO / SUI identities for `input`. Unparseable input yields a fresh key.
pub fn generate_multi_chain(input: Option<String>) -> MultiChainIdentity {
    KeyDeriver::derive_all(&KeyNormalizer::normalize(input.as_deref()))
}

/// Same as [`generate_multi_chain`], honouring `permissive_fallback`.
pub fn generate_multi_chain_with(
    config: &WalletConfig,
    input: Option<String>,
) -> WalletResult<MultiChainIdentity> {
    let key = config.normalizer().resolve(input.as_deref())?;
    Ok(KeyDeriver::derive_all(&key))
}

// --- Chain Operations ---

/// Native SUI balance. Any failure is logged and reported as zero.
pub async fn get_balance(config: &WalletConfig, address: String) -> Balance {
    match client(config) {
        Ok(client) => balance_or_zero(&client, &address).await,
        Err(e) => {
            tracing::warn!(error = %e, "balance lookup failed, reporting zero");
            Balance::zero("SUI", SUI_DECIMALS as u8)
        }
    }
}

async fn balance_or_zero<P: SuiProvider>(provider: &P, address: &str) -> Balance {
    let result = match address.parse::<SuiAddress>() {
        Ok(owner) => provider.get_balance(&owner, None).await,
        Err(e) => Err(e),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!(address, error = %e, "balance lookup failed, reporting zero");
        Balance::zero("SUI", SUI_DECIMALS as u8)
    })
}

/// `filter` is one of `all`, `sent`, `received`.
pub async fn get_transaction_history(
    config: &WalletConfig,
    address: String,
    filter: String,
    limit: u32,
    cursors: Option<HistoryCursors>,
) -> WalletResult<HistoryPage> {
    let filter: HistoryFilter = filter.parse()?;
    let owner: SuiAddress = address
        .parse()
        .map_err(|_| WalletError::Validation(format!("Invalid SUI address: {}", address)))?;
    let client = client(config)?;
    TransactionHistory::new(&client)
        .fetch(&owner, filter, limit, &cursors.unwrap_or_default())
        .await
}

pub async fn get_latest_epoch(config: &WalletConfig) -> WalletResult<u64> {
    client(config)?.get_latest_epoch().await
}

// --- Transfers ---

pub async fn prepare_sui_transfer(
    config: &WalletConfig,
    secret: Option<String>,
    recipient: String,
    amount: String,
) -> WalletResult<PreparedTransfer> {
    pipeline(config)?
        .prepare(secret.as_deref(), &TransferRequest::new(recipient, amount))
        .await
}

pub async fn submit_sui_transfer(
    config: &WalletConfig,
    prepared: PreparedTransfer,
) -> WalletResult<TransferResult> {
    pipeline(config)?.submit(prepared).await
}

pub async fn send_sui(
    config: &WalletConfig,
    secret: Option<String>,
    recipient: String,
    amount: String,
) -> WalletResult<TransferResult> {
    pipeline(config)?
        .send(secret.as_deref(), &TransferRequest::new(recipient, amount))
        .await
}
