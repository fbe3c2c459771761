// wallet-core/src/network/models.rs
//
// SUI JSON-RPC Data Models
//
// Tất cả structs đều:
// - Deserialize trực tiếp từ response của fullnode (camelCase)
// - Số lớn giữ dạng String (u64 của SUI được serialize thành string)
// - Field không bắt buộc dùng #[serde(default)] để chịu được node khác version

use crate::error::{NetworkError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// BALANCE
// =============================================================================

/// Số dư tài sản
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Số dư raw (string để tránh overflow với số lớn)
    pub raw: String,
    /// Số dư đã format với decimals (e.g., "1.5")
    pub formatted: String,
    /// Symbol (e.g., "SUI")
    pub symbol: String,
    /// Số decimals
    pub decimals: u8,
}

impl Balance {
    /// Tạo Balance từ raw value và decimals
    pub fn new(raw: impl Into<String>, decimals: u8, symbol: impl Into<String>) -> Self {
        let raw_str = raw.into();
        let formatted = Self::format_balance(&raw_str, decimals);
        Self {
            raw: raw_str,
            formatted,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Tạo Balance với giá trị = 0
    pub fn zero(symbol: impl Into<String>, decimals: u8) -> Self {
        Self::new("0", decimals, symbol)
    }

    /// Format raw balance thành human-readable string
    fn format_balance(raw: &str, decimals: u8) -> String {
        if decimals == 0 || raw == "0" {
            return raw.to_string();
        }

        let raw_len = raw.len();
        let decimals_usize = decimals as usize;

        if raw_len <= decimals_usize {
            // Số nhỏ hơn 1 (e.g., 0.001)
            let padding = decimals_usize - raw_len;
            let decimal_part = format!("{}{}", "0".repeat(padding), raw);
            let trimmed = decimal_part.trim_end_matches('0');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                format!("0.{}", trimmed)
            }
        } else {
            // Số >= 1
            let integer_part = &raw[..raw_len - decimals_usize];
            let decimal_part = &raw[raw_len - decimals_usize..];
            let trimmed_decimal = decimal_part.trim_end_matches('0');
            if trimmed_decimal.is_empty() {
                integer_part.to_string()
            } else {
                format!("{}.{}", integer_part, trimmed_decimal)
            }
        }
    }
}

/// `suix_getBalance` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub coin_type: String,
    #[serde(default)]
    pub coin_object_count: u64,
    pub total_balance: String,
}

// =============================================================================
// COINS
// =============================================================================

/// Một coin object có thể chi tiêu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinObject {
    pub coin_type: String,
    pub coin_object_id: String,
    pub version: String,
    pub digest: String,
    pub balance: String,
}

/// `suix_getCoins` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPage {
    pub data: Vec<CoinObject>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

// =============================================================================
// TRANSACTION BUILD / DRY RUN / EXECUTE
// =============================================================================

/// Parameters of a single-coin pay transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub sender: String,
    pub input_coins: Vec<String>,
    pub recipients: Vec<String>,
    /// MIST amounts, one per recipient.
    pub amounts: Vec<u64>,
    pub gas_budget: u64,
}

/// Result of the `unsafe_*` transaction builders.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBytes {
    /// Base64 BCS bytes
    pub tx_bytes: String,
}

/// Gas cost breakdown reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    pub computation_cost: String,
    pub storage_cost: String,
    pub storage_rebate: String,
    #[serde(default)]
    pub non_refundable_storage_fee: Option<String>,
}

impl GasCostSummary {
    /// `computationCost + storageCost - storageRebate`, signed and never clamped.
    ///
    /// Each field is a u64 on the wire; widening to i128 keeps the sum exact.
    pub fn net_fee(&self) -> WalletResult<i128> {
        let computation = parse_amount("computationCost", &self.computation_cost)?;
        let storage = parse_amount("storageCost", &self.storage_cost)?;
        let rebate = parse_amount("storageRebate", &self.storage_rebate)?;
        Ok(computation + storage - rebate)
    }
}

fn parse_amount(field: &str, value: &str) -> WalletResult<i128> {
    value.trim().parse::<u64>().map(i128::from).map_err(|e| {
        NetworkError::MalformedResponse(format!("{} '{}' is not a u64: {}", field, value, e))
            .into()
    })
}

/// `effects.status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionStatus {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
    pub gas_used: GasCostSummary,
}

/// `sui_dryRunTransactionBlock` result (only the parts we read)
#[derive(Debug, Clone, Deserialize)]
pub struct DryRunResponse {
    pub effects: TransactionEffects,
}

/// `sui_executeTransactionBlock` result
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteResponse {
    pub digest: String,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    /// Full node response, kept for callers that need more than the digest.
    #[serde(skip)]
    pub raw: serde_json::Value,
}

/// Execution consistency mode sent with `sui_executeTransactionBlock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecuteRequestType {
    WaitForLocalExecution,
}

// =============================================================================
// HISTORY
// =============================================================================

/// Query filter của `suix_queryTransactionBlocks`
/// Serialize thành `{"FromAddress": "0x..."}` / `{"ToAddress": "0x..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TransactionFilter {
    FromAddress(String),
    ToAddress(String),
}

/// History view requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl FromStr for HistoryFilter {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(HistoryFilter::All),
            "sent" => Ok(HistoryFilter::Sent),
            "received" => Ok(HistoryFilter::Received),
            other => Err(WalletError::Validation(format!(
                "Invalid filter type '{}': expected all, sent or received",
                other
            ))),
        }
    }
}

/// One digest entry of a `suix_queryTransactionBlocks` page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionDigest {
    pub digest: String,
}

/// `suix_queryTransactionBlocks` result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    #[serde(default)]
    pub data: Vec<TransactionDigest>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// `sui_getTransactionBlock` result (subset)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlock {
    pub digest: String,
    #[serde(default)]
    pub transaction: Option<TransactionEnvelope>,
    #[serde(default)]
    pub events: Vec<SuiEvent>,
    #[serde(default)]
    pub balance_changes: Vec<BalanceChange>,
    #[serde(default)]
    pub timestamp_ms: Option<String>,
}

impl TransactionBlock {
    pub fn sender(&self) -> Option<&str> {
        self.transaction.as_ref().map(|t| t.data.sender.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEnvelope {
    pub data: TransactionData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionData {
    pub sender: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub parsed_json: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceChange {
    #[serde(default)]
    pub owner: serde_json::Value,
    pub amount: String,
}

impl BalanceChange {
    /// Address of an `AddressOwner`-owned change.
    pub fn address_owner(&self) -> Option<&str> {
        self.owner.get("AddressOwner").and_then(|v| v.as_str())
    }
}

/// Hướng của giao dịch so với địa chỉ đang xem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Sent,
    Received,
}

/// Một dòng lịch sử đã resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub digest: String,
    pub from: String,
    pub to: String,
    /// MIST, absolute value
    pub amount_mist: u64,
    /// SUI with 6 decimals (e.g. "1.500000")
    pub amount_sui: String,
    /// Unix milliseconds, 0 when unknown
    pub timestamp: u64,
    pub direction: Direction,
}

/// Cursor pair cho 2 query song song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryCursors {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    pub txs: Vec<HistoryEntry>,
    pub has_next_page: bool,
    pub next_cursor: HistoryCursors,
}

// =============================================================================
// TESTS
// =============================================================================
