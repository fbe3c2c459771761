// wallet-core/src/network/client.rs
//
// SUI Client - SuiProvider trên một RpcTransport bất kỳ
//
// ┌───────────────────────────┬────────────────────────────────────┐
// │ Thao tác                  │ Method                             │
// ├───────────────────────────┼────────────────────────────────────┤
// │ balance                   │ suix_getBalance                    │
// │ coins                     │ suix_getCoins                      │
// │ build pay tx              │ unsafe_paySui                      │
// │ dry-run                   │ sui_dryRunTransactionBlock         │
// │ execute                   │ sui_executeTransactionBlock        │
// │ epoch                     │ suix_getLatestSuiSystemState       │
// │ history page              │ suix_queryTransactionBlocks        │
// │ tx detail                 │ sui_getTransactionBlock            │
// └───────────────────────────┴────────────────────────────────────┘

use crate::chains::sui::{SuiAddress, SuiSignature, SUI_DECIMALS};
use crate::error::{NetworkError, WalletResult};
use crate::network::models::{
    Balance, BalanceResponse, CoinPage, DryRunResponse, ExecuteRequestType, ExecuteResponse,
    PayRequest, TransactionBlock, TransactionBytes, TransactionFilter, TransactionPage,
};
use crate::network::traits::{RpcTransport, SuiProvider};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

pub struct SuiClient<T> {
    transport: T,
}

impl<T: RpcTransport> SuiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request<R: DeserializeOwned>(&self, method: &str, params: Value) -> WalletResult<R> {
        let value = self.transport.call(method, params).await?;
        decode(method, value)
    }
}

fn decode<R: DeserializeOwned>(method: &str, value: Value) -> WalletResult<R> {
    serde_json::from_value(value)
        .map_err(|e| NetworkError::MalformedResponse(format!("{}: {}", method, e)).into())
}

/// u64 that the node may send either as a JSON string or a number.
fn json_u64(method: &str, field: &str, value: Option<&Value>) -> WalletResult<u64> {
    let parsed = match value {
        Some(Value::String(s)) => s.parse::<u64>().ok(),
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        NetworkError::MalformedResponse(format!("{}: missing or invalid '{}'", method, field))
            .into()
    })
}

#[async_trait]
impl<T: RpcTransport> SuiProvider for SuiClient<T> {
    async fn get_balance(
        &self,
        owner: &SuiAddress,
        coin_type: Option<&str>,
    ) -> WalletResult<Balance> {
        let response: BalanceResponse = self
            .request("suix_getBalance", json!([owner.to_string(), coin_type]))
            .await?;
        // Chỉ native SUI mới biết chắc decimals
        let (decimals, symbol) = if response.coin_type.ends_with("::sui::SUI") {
            (SUI_DECIMALS as u8, "SUI".to_string())
        } else {
            let symbol = response.coin_type.rsplit("::").next().unwrap_or_default().to_string();
            (0, symbol)
        };
        Ok(Balance::new(response.total_balance, decimals, symbol))
    }

    async fn get_coins(&self, owner: &SuiAddress, coin_type: &str) -> WalletResult<CoinPage> {
        self.request(
            "suix_getCoins",
            json!([owner.to_string(), coin_type, Value::Null, Value::Null]),
        )
        .await
    }

    async fn pay_sui(&self, request: &PayRequest) -> WalletResult<Vec<u8>> {
        let amounts: Vec<String> = request.amounts.iter().map(u64::to_string).collect();
        let built: TransactionBytes = self
            .request(
                "unsafe_paySui",
                json!([
                    request.sender,
                    request.input_coins,
                    request.recipients,
                    amounts,
                    request.gas_budget.to_string(),
                ]),
            )
            .await?;
        STANDARD.decode(built.tx_bytes.as_bytes()).map_err(|e| {
            NetworkError::MalformedResponse(format!("unsafe_paySui: txBytes is not base64: {}", e))
                .into()
        })
    }

    async fn dry_run(&self, tx_bytes: &[u8]) -> WalletResult<DryRunResponse> {
        self.request("sui_dryRunTransactionBlock", json!([STANDARD.encode(tx_bytes)]))
            .await
    }

    async fn execute(
        &self,
        tx_bytes: &[u8],
        signature: &SuiSignature,
    ) -> WalletResult<ExecuteResponse> {
        let method = "sui_executeTransactionBlock";
        let value = self
            .transport
            .call(
                method,
                json!([
                    STANDARD.encode(tx_bytes),
                    [signature.to_base64()],
                    { "showEffects": true, "showEvents": true },
                    ExecuteRequestType::WaitForLocalExecution,
                ]),
            )
            .await?;
        let mut response: ExecuteResponse = decode(method, value.clone())?;
        response.raw = value;
        Ok(response)
    }

    async fn get_latest_epoch(&self) -> WalletResult<u64> {
        let method = "suix_getLatestSuiSystemState";
        let state = self.transport.call(method, json!([])).await?;
        json_u64(method, "epoch", state.get("epoch"))
    }

    async fn query_transaction_blocks(
        &self,
        filter: &TransactionFilter,
        cursor: Option<&str>,
        limit: u32,
    ) -> WalletResult<TransactionPage> {
        self.request(
            "suix_queryTransactionBlocks",
            json!([
                {
                    "filter": filter,
                    "options": { "showInput": true, "showEffects": true, "showEvents": true }
                },
                cursor,
                limit,
                true
            ]),
        )
        .await
    }

    async fn get_transaction_block(&self, digest: &str) -> WalletResult<Option<TransactionBlock>> {
        let method = "sui_getTransactionBlock";
        let value = self
            .transport
            .call(
                method,
                json!([
                    digest,
                    {
                        "showInput": true,
                        "showEffects": true,
                        "showEvents": true,
                        "showBalanceChanges": true
                    }
                ]),
            )
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        decode(method, value).map(Some)
    }
}

// =============================================================================
// TESTS
// =============================================================================
