// wallet-core/src/codec/base58check.rs
//
// Base58Check = Base58(payload || SHA256(SHA256(payload))[..4])
// Payload đã chứa version byte (caller tự prefix).

use crate::error::{CodecError, WalletResult};

/// Encode payload (version byte included) as Base58Check.
#[inline]
pub fn base58check_encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decode Base58Check, verify the 4-byte checksum and return the payload
/// (version byte still attached, checksum stripped).
pub fn base58check_decode(text: &str) -> WalletResult<Vec<u8>> {
    bs58::decode(text)
        .with_check(None)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidChecksum { .. } => CodecError::ChecksumMismatch.into(),
            other => CodecError::InvalidBase58(other.to_string()).into(),
        })
}

// =============================================================================
// TESTS
// =============================================================================
