// wallet-core/src/chains/utxo/identity.rs
//
// FLO-style identifiers
//
// - hash_id:  Base58Check(0x23 ‖ HASH160(text))   : ID cố định cho một chuỗi bất kỳ
// - tmp_id:   Base58Check(0x23 ‖ 20 random bytes) : ID tạm, không có private key
// - generate_new_id: keypair secp256k1 mới → {FLO address, pubkey, WIF}

use crate::chains::utxo::{UtxoAddress, Wif};
use crate::crypto::hash::hash160;
use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::crypto::profiles::NetworkVersionProfile;
use crate::error::WalletResult;
use rand::RngCore;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Freshly generated FLO identity.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct FloIdentity {
    pub flo_id: String,
    /// Compressed SEC1 public key, hex
    pub pub_key: String,
    /// WIF (version 0xa3)
    pub priv_key: String,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for FloIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloIdentity")
            .field("flo_id", &self.flo_id)
            .field("pub_key", &self.pub_key)
            .field("priv_key", &"[REDACTED]")
            .finish()
    }
}

/// Deterministic FLO-style address of an arbitrary string.
pub fn hash_id(text: &str) -> String {
    UtxoAddress::p2pkh_from_hash(&hash160(text.as_bytes()), &NetworkVersionProfile::FLO)
}

/// Random FLO-style address with no key behind it.
pub fn tmp_id() -> String {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    UtxoAddress::p2pkh_from_hash(&bytes, &NetworkVersionProfile::FLO)
}

pub fn generate_new_id() -> WalletResult<FloIdentity> {
    let scalar = Secp256k1Deriver::random_scalar();
    let public_key = Secp256k1Deriver::public_key(&scalar, true)?;
    let profile = NetworkVersionProfile::FLO;

    Ok(FloIdentity {
        flo_id: UtxoAddress::p2pkh(&public_key, &profile),
        pub_key: hex::encode(&public_key),
        priv_key: Wif::encode(&scalar, true, &profile).to_string(),
    })
}
