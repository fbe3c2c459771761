// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! This module implements the key material side of the multi-chain core:
//!
//! - **Key Normalization**: any supported secret format → one 32-byte scalar via [`KeyNormalizer`].
//! - **Key Derivation**: secp256k1 (BTC/FLO) and Ed25519 (SUI) identities from that scalar via [`KeyDeriver`].
//! - **Version Profiles**: per-chain version bytes passed as parameters via [`NetworkVersionProfile`].
//! - **Hashing**: SHA-256, HASH160 and BLAKE2b-256 helpers in [`hash`].

pub mod hash;
pub mod key_deriver;
pub mod key_normalizer;
pub mod profiles;
pub mod scalar;

// Re-exports for cleaner API access
pub use key_deriver::{ChainKeyPair, CurveType, KeyDeriver, MultiChainIdentity};
pub use key_normalizer::{InputFormat, KeyNormalizer, NormalizedKey};
pub use profiles::NetworkVersionProfile;
pub use scalar::PrivateScalar;
