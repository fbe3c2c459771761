// wallet-core/src/network/history.rs
//
// Transaction History
//
// Flow:
//   FromAddress page ─┐
//                     ├─ dedupe theo digest ─► sui_getTransactionBlock ─► sort desc
//   ToAddress page  ──┘
//
// `All` chạy 2 query song song; `Sent` / `Received` chỉ chạy 1.

use crate::chains::sui::{SuiAddress, SUI_DECIMALS};
use crate::error::WalletResult;
use crate::network::models::{
    Direction, HistoryCursors, HistoryEntry, HistoryFilter, HistoryPage, TransactionBlock,
    TransactionFilter, TransactionPage,
};
use crate::network::traits::SuiProvider;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::collections::HashSet;

/// Node-side page cap of `suix_queryTransactionBlocks`.
pub const MAX_PAGE_LIMIT: u32 = 50;

const UNKNOWN: &str = "Unknown";

pub struct TransactionHistory<'a, P> {
    provider: &'a P,
}

impl<'a, P: SuiProvider> TransactionHistory<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// One page of resolved history for `address`, newest first.
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_LIMIT` and applies to each query.
    pub async fn fetch(
        &self,
        address: &SuiAddress,
        filter: HistoryFilter,
        limit: u32,
        cursors: &HistoryCursors,
    ) -> WalletResult<HistoryPage> {
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        let owner = address.to_string();

        let (sent, received) = match filter {
            HistoryFilter::All => tokio::try_join!(
                self.page(
                    TransactionFilter::FromAddress(owner.clone()),
                    cursors.from.as_deref(),
                    limit
                ),
                self.page(
                    TransactionFilter::ToAddress(owner.clone()),
                    cursors.to.as_deref(),
                    limit
                ),
            )?,
            HistoryFilter::Sent => (
                self.page(TransactionFilter::FromAddress(owner), cursors.from.as_deref(), limit)
                    .await?,
                TransactionPage::default(),
            ),
            HistoryFilter::Received => (
                TransactionPage::default(),
                self.page(TransactionFilter::ToAddress(owner), cursors.to.as_deref(), limit)
                    .await?,
            ),
        };

        let mut seen = HashSet::new();
        let digests: Vec<&str> = sent
            .data
            .iter()
            .chain(received.data.iter())
            .map(|tx| tx.digest.as_str())
            .filter(|digest| seen.insert(*digest))
            .collect();

        let mut txs = Vec::with_capacity(digests.len());
        for digest in digests {
            match self.provider.get_transaction_block(digest).await? {
                Some(block) => txs.push(summarize(&block, address)),
                None => tracing::debug!(digest, "transaction block not found, skipped"),
            }
        }
        txs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        tracing::info!(
            address = %address,
            filter = ?filter,
            count = txs.len(),
            "history page fetched"
        );

        Ok(HistoryPage {
            txs,
            has_next_page: sent.has_next_page || received.has_next_page,
            next_cursor: HistoryCursors {
                from: sent.next_cursor,
                to: received.next_cursor,
            },
        })
    }

    async fn page(
        &self,
        filter: TransactionFilter,
        cursor: Option<&str>,
        limit: u32,
    ) -> WalletResult<TransactionPage> {
        self.provider.query_transaction_blocks(&filter, cursor, limit).await
    }
}

/// Resolve sender, recipient and amount of one block relative to `viewer`.
///
/// Recipient and amount come from the first transfer event; failing that,
/// from the first balance change owned by someone other than the sender.
/// With neither, the recipient is unknown and the event amount (if any) is kept.
pub fn summarize(block: &TransactionBlock, viewer: &SuiAddress) -> HistoryEntry {
    let from = block.sender().unwrap_or(UNKNOWN).to_string();

    let from_event = block
        .events
        .iter()
        .find(|ev| {
            ev.event_type.contains("TransferEvent") || ev.event_type.contains("::coin::Transfer")
        })
        .map(|ev| {
            let to = ev
                .parsed_json
                .get("recipient")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN)
                .to_string();
            (to, json_amount(ev.parsed_json.get("amount")))
        });

    let (to, amount_mist) = match from_event {
        Some((to, amount)) if to != UNKNOWN => (to, amount),
        event => {
            // An event without a recipient still carries the amount
            let event_amount = event.map(|(_, amount)| amount).unwrap_or(0);
            block
                .balance_changes
                .iter()
                .find_map(|change| {
                    change
                        .address_owner()
                        .filter(|owner| *owner != from)
                        .map(|owner| (owner.to_string(), abs_amount(&change.amount)))
                })
                .unwrap_or_else(|| (UNKNOWN.to_string(), event_amount))
        }
    };

    let timestamp = block
        .timestamp_ms
        .as_deref()
        .and_then(|ts| ts.parse::<u64>().ok())
        .unwrap_or(0);

    let direction = if viewer.matches(&from) {
        Direction::Sent
    } else {
        Direction::Received
    };

    HistoryEntry {
        digest: block.digest.clone(),
        from,
        to,
        amount_mist,
        amount_sui: format_sui(amount_mist),
        timestamp,
        direction,
    }
}

/// MIST → SUI with exactly 6 decimals.
pub fn format_sui(mist: u64) -> String {
    let sui = Decimal::from_i128_with_scale(i128::from(mist), SUI_DECIMALS)
        .round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.6}", sui)
}

fn json_amount(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => abs_amount(s),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

fn abs_amount(text: &str) -> u64 {
    text.trim()
        .parse::<i128>()
        .map(|v| u64::try_from(v.unsigned_abs()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

// =============================================================================
// TESTS
// =============================================================================
