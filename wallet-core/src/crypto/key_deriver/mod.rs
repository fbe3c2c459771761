// wallet-core/src/crypto/key_deriver/mod.rs
//
// Multi-Chain Deriver - một scalar, ba identity
//
// Kiến trúc:
// ┌──────────────────────────────────────────────────────────┐
// │  NormalizedKey (scalar 32B + compressed flag)            │
// │                         │                                │
// │      ┌──────────────────┼───────────────────┐            │
// │      ▼                  ▼                   ▼            │
// │  secp256k1          secp256k1            ed25519         │
// │  BTC (chain A)      FLO (chain B)        SUI (chain C)   │
// │  bc1q... / WIF 0x80 F... / WIF 0xa3      0x... / suipriv │
// └──────────────────────────────────────────────────────────┘
//
// Mỗi chain derive ĐỘC LẬP: chain nào lỗi thì chỉ slot đó mang lỗi.

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::chains::sui::keypair::derive_sui_keypair;
use crate::chains::utxo::{UtxoAddress, Wif};
use crate::chains::ChainId;
use crate::crypto::key_normalizer::NormalizedKey;
use crate::crypto::profiles::NetworkVersionProfile;
use crate::crypto::scalar::PrivateScalar;
use crate::error::WalletResult;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve type cho key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// secp256k1 - BTC, FLO
    Secp256k1,
    /// Ed25519 - SUI
    Ed25519,
}

/// Address + exportable private key of one chain.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct ChainKeyPair {
    pub address: String,
    #[serde(rename = "privateKey")]
    pub exportable_private_key: String,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for ChainKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainKeyPair")
            .field("address", &self.address)
            .field("exportable_private_key", &"[REDACTED]")
            .finish()
    }
}

/// Identities of all three chains from one scalar.
///
/// Each slot is derived independently, so a failing chain never hides the
/// others.
#[derive(Debug, Clone)]
pub struct MultiChainIdentity {
    pub btc: WalletResult<ChainKeyPair>,
    pub flo: WalletResult<ChainKeyPair>,
    pub sui: WalletResult<ChainKeyPair>,
}

impl MultiChainIdentity {
    pub fn get(&self, chain: ChainId) -> &WalletResult<ChainKeyPair> {
        match chain {
            ChainId::Btc => &self.btc,
            ChainId::Flo => &self.flo,
            ChainId::Sui => &self.sui,
        }
    }

    /// `true` when every chain derived successfully.
    pub fn is_complete(&self) -> bool {
        ChainId::ALL.iter().all(|c| self.get(*c).is_ok())
    }
}

// JSON: { "BTC": {address, privateKey}, "FLO": ..., "SUI": {"error": "..."} }
impl Serialize for MultiChainIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(untagged)]
        enum Slot<'a> {
            Derived(&'a ChainKeyPair),
            Failed { error: String },
        }

        fn slot(result: &WalletResult<ChainKeyPair>) -> Slot<'_> {
            match result {
                Ok(pair) => Slot::Derived(pair),
                Err(e) => Slot::Failed {
                    error: e.to_string(),
                },
            }
        }

        let mut state = serializer.serialize_struct("MultiChainIdentity", 3)?;
        state.serialize_field("BTC", &slot(&self.btc))?;
        state.serialize_field("FLO", &slot(&self.flo))?;
        state.serialize_field("SUI", &slot(&self.sui))?;
        state.end()
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Unified Key Deriver - Entry point cho mọi chain
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive all three chains. Never fails as a whole.
    pub fn derive_all(key: &NormalizedKey) -> MultiChainIdentity {
        let identity = MultiChainIdentity {
            btc: Self::derive(ChainId::Btc, key),
            flo: Self::derive(ChainId::Flo, key),
            sui: Self::derive(ChainId::Sui, key),
        };

        for chain in ChainId::ALL {
            if let Err(e) = identity.get(chain) {
                tracing::warn!(chain = %chain, error = %e, "chain derivation failed");
            }
        }
        identity
    }

    /// Derive one chain.
    pub fn derive(chain: ChainId, key: &NormalizedKey) -> WalletResult<ChainKeyPair> {
        match chain {
            ChainId::Btc => {
                Self::derive_utxo(&key.scalar, key.compressed, &NetworkVersionProfile::BTC)
            }
            ChainId::Flo => {
                Self::derive_utxo(&key.scalar, key.compressed, &NetworkVersionProfile::FLO)
            }
            ChainId::Sui => Self::derive_sui(&key.scalar),
        }
    }

    /// secp256k1 chain described by `profile`.
    ///
    /// Profiles with a segwit hrp get a P2WPKH address; P2WPKH only admits
    /// compressed keys, so `compressed` is forced on for them (WIF included).
    pub fn derive_utxo(
        scalar: &PrivateScalar,
        compressed: bool,
        profile: &NetworkVersionProfile,
    ) -> WalletResult<ChainKeyPair> {
        let (address, compressed) = match profile.segwit_hrp {
            Some(hrp) => {
                let public_key = Secp256k1Deriver::public_key(scalar, true)?;
                (UtxoAddress::p2wpkh(&public_key, hrp)?, true)
            }
            None => {
                let public_key = Secp256k1Deriver::public_key(scalar, compressed)?;
                (UtxoAddress::p2pkh(&public_key, profile), compressed)
            }
        };

        let wif = Wif::encode(scalar, compressed, profile);
        Ok(ChainKeyPair {
            address,
            exportable_private_key: wif.to_string(),
        })
    }

    /// Ed25519 / SUI.
    pub fn derive_sui(seed: &PrivateScalar) -> WalletResult<ChainKeyPair> {
        let (address, exported) = derive_sui_keypair(seed)?;
        Ok(ChainKeyPair {
            address: address.to_string(),
            exportable_private_key: exported.to_string(),
        })
    }

    pub fn curve_of(chain: ChainId) -> CurveType {
        match chain {
            ChainId::Btc | ChainId::Flo => CurveType::Secp256k1,
            ChainId::Sui => CurveType::Ed25519,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
