// wallet-core/src/network/traits.rs
//
// Provider Traits
//
// Hai tầng:
// - `RpcTransport`: gửi một JSON-RPC call, trả về `result` (hoặc lỗi)
// - `SuiProvider`: các thao tác typed mà pipeline và history cần
//
// Pipeline chỉ phụ thuộc vào `SuiProvider`, nên test có thể thay transport
// bằng bản in-memory mà không đụng tới HTTP.

use crate::chains::sui::{SuiAddress, SuiSignature};
use crate::error::WalletResult;
use crate::network::models::{
    Balance, CoinPage, DryRunResponse, ExecuteResponse, PayRequest, TransactionBlock,
    TransactionFilter, TransactionPage,
};
use async_trait::async_trait;
use serde_json::Value;

// =============================================================================
// TRANSPORT
// =============================================================================

/// One JSON-RPC round trip.
///
/// Implementations return the `result` member. A non-null `error` member is
/// reported as `NetworkError::Rpc` and takes precedence over `result`.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(&self, method: &str, params: Value) -> WalletResult<Value>;
}

// =============================================================================
// SUI PROVIDER
// =============================================================================

/// Typed view of the fullnode operations this crate uses.
#[async_trait]
pub trait SuiProvider: Send + Sync {
    /// Total balance of `coin_type` (native SUI when `None`).
    async fn get_balance(&self, owner: &SuiAddress, coin_type: Option<&str>)
        -> WalletResult<Balance>;

    /// First page of coin objects of `coin_type` owned by `owner`.
    async fn get_coins(&self, owner: &SuiAddress, coin_type: &str) -> WalletResult<CoinPage>;

    /// Ask the node to build a pay transaction. Returns the BCS bytes.
    async fn pay_sui(&self, request: &PayRequest) -> WalletResult<Vec<u8>>;

    async fn dry_run(&self, tx_bytes: &[u8]) -> WalletResult<DryRunResponse>;

    /// Execute with `WaitForLocalExecution`.
    async fn execute(
        &self,
        tx_bytes: &[u8],
        signature: &SuiSignature,
    ) -> WalletResult<ExecuteResponse>;

    async fn get_latest_epoch(&self) -> WalletResult<u64>;

    /// One page of digests, newest first.
    async fn query_transaction_blocks(
        &self,
        filter: &TransactionFilter,
        cursor: Option<&str>,
        limit: u32,
    ) -> WalletResult<TransactionPage>;

    /// Full details of one transaction, `None` when the node has no result.
    async fn get_transaction_block(&self, digest: &str) -> WalletResult<Option<TransactionBlock>>;
}
