// wallet-core/src/chains/sui/keypair.rs
//
// SUI Private Key Export (Bech32, hrp "suiprivkey")
// words = convert_bits([flag] ++ seed, 8 → 5, pad)
// Chỉ hỗ trợ flag 0x00 (Ed25519). Flag khác → UnsupportedKeyScheme.

use super::address::{SuiAddress, ED25519_FLAG};
use crate::codec::bech32;
use crate::crypto::key_deriver::Ed25519Deriver;
use crate::crypto::scalar::PrivateScalar;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

pub const SUI_PRIVATE_KEY_HRP: &str = "suiprivkey";
/// Literal prefix used to recognise exported keys.
pub const SUI_PRIVATE_KEY_PREFIX: &str = "suiprivkey1";

pub struct SuiPrivateKey;

impl SuiPrivateKey {
    /// `suiprivkey1...` string for an Ed25519 seed.
    pub fn encode(seed: &PrivateScalar) -> WalletResult<Zeroizing<String>> {
        let mut payload = Zeroizing::new(Vec::with_capacity(33));
        payload.push(ED25519_FLAG);
        payload.extend_from_slice(seed.as_bytes());
        let words = bech32::to_words(&payload)?;
        Ok(Zeroizing::new(bech32::bech32_encode(SUI_PRIVATE_KEY_HRP, &words)?))
    }

    /// Seed inside a `suiprivkey1...` string.
    pub fn decode(text: &str) -> WalletResult<PrivateScalar> {
        let words = bech32::bech32_decode_with_hrp(text, SUI_PRIVATE_KEY_HRP)?;
        let payload = Zeroizing::new(bech32::from_words(&words)?);
        match payload.split_first() {
            Some((&ED25519_FLAG, seed)) => PrivateScalar::from_slice(seed),
            Some((&flag, _)) => Err(CryptoError::UnsupportedKeyScheme(flag).into()),
            None => Err(CryptoError::InvalidKeyFormat("empty suiprivkey payload".into()).into()),
        }
    }
}

/// Address + export string of one SUI identity.
pub fn derive_sui_keypair(seed: &PrivateScalar) -> WalletResult<(SuiAddress, Zeroizing<String>)> {
    let public_key = Ed25519Deriver::public_key(seed);
    let address = SuiAddress::from_ed25519_public_key(&public_key);
    let exported = SuiPrivateKey::encode(seed)?;
    Ok((address, exported))
}
