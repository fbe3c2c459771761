// wallet-core/src/crypto/profiles.rs
//
// Network Version Profiles - bảng hằng số compile-time cho các chain secp256k1.
// Mỗi deriver nhận profile qua tham số, KHÔNG có global state bị mutate.

use serde::Serialize;

/// Version bytes (and optional segwit hrp) of a Base58Check chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVersionProfile {
    pub name: &'static str,
    /// Prefix of P2PKH address payloads.
    pub pubkey_hash: u8,
    /// Prefix of WIF private key payloads.
    pub private_key: u8,
    /// Human-readable part for native segwit addresses, if the chain uses them.
    pub segwit_hrp: Option<&'static str>,
}

impl NetworkVersionProfile {
    /// Bitcoin mainnet (chain A).
    pub const BTC: NetworkVersionProfile = NetworkVersionProfile {
        name: "BTC",
        pubkey_hash: 0x00,
        private_key: 0x80,
        segwit_hrp: Some("bc"),
    };

    /// FLO mainnet (chain B).
    pub const FLO: NetworkVersionProfile = NetworkVersionProfile {
        name: "FLO",
        pubkey_hash: 0x23,
        private_key: 0xa3,
        segwit_hrp: None,
    };

    pub const ALL: [NetworkVersionProfile; 2] = [Self::BTC, Self::FLO];

    /// Profile whose WIF version byte matches, if any.
    pub fn by_private_key_version(version: u8) -> Option<NetworkVersionProfile> {
        Self::ALL.into_iter().find(|p| p.private_key == version)
    }
}
