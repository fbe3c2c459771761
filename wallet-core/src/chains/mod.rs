// src/chains/mod.rs
pub mod sui;
pub mod utxo;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Các chain được hỗ trợ (thứ tự cố định BTC, FLO, SUI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChainId {
    /// Bitcoin mainnet, native segwit
    Btc,
    /// FLO mainnet, legacy P2PKH
    Flo,
    /// SUI mainnet
    Sui,
}

impl ChainId {
    pub const ALL: [ChainId; 3] = [ChainId::Btc, ChainId::Flo, ChainId::Sui];

    pub fn symbol(&self) -> &'static str {
        match self {
            ChainId::Btc => "BTC",
            ChainId::Flo => "FLO",
            ChainId::Sui => "SUI",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
