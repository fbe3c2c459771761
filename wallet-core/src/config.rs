// wallet-core/src/config.rs
//
// Runtime configuration
//
// Env vars (giá trị lỗi → dùng default):
// - SUI_RPC_URL                 (default https://fullnode.mainnet.sui.io:443)
// - SUI_RPC_TIMEOUT_MS          (default 15000)
// - SUI_GAS_BUDGET              (default 10000000 MIST)
// - WALLET_PERMISSIVE_FALLBACK  (default true)
// - RUST_LOG                    (default "info")

use crate::chains::sui::transfer::DEFAULT_GAS_BUDGET;
use crate::crypto::key_normalizer::KeyNormalizer;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub rpc_url: String,
    pub timeout_ms: u64,
    /// Gas budget ceiling for built transfers (MIST)
    pub gas_budget: u64,
    /// Unparseable secrets become a fresh key instead of an error.
    pub permissive_fallback: bool,
    pub log_filter: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            gas_budget: DEFAULT_GAS_BUDGET,
            permissive_fallback: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl WalletConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or invalid values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            rpc_url: parsed("SUI_RPC_URL").unwrap_or(defaults.rpc_url),
            timeout_ms: parsed("SUI_RPC_TIMEOUT_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.timeout_ms),
            gas_budget: parsed("SUI_GAS_BUDGET")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.gas_budget),
            permissive_fallback: parsed("WALLET_PERMISSIVE_FALLBACK")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.permissive_fallback),
            log_filter: parsed("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn normalizer(&self) -> KeyNormalizer {
        KeyNormalizer::new(self.permissive_fallback)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
