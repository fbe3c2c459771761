// wallet-core/src/chains/utxo/mod.rs

//! secp256k1 / Base58Check Chains (BTC, FLO)
//!
//! Both chains share the same key material and codecs; they differ only in
//! their [`NetworkVersionProfile`](crate::crypto::profiles::NetworkVersionProfile)
//! and in the address text encoding (BTC: native segwit, FLO: legacy P2PKH).

pub mod address;
pub mod identity;
pub mod wif;

pub use address::UtxoAddress;
pub use identity::{generate_new_id, hash_id, tmp_id, FloIdentity};
pub use wif::{DecodedWif, Wif};
