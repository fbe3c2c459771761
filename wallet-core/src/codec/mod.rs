// wallet-core/src/codec/mod.rs

//! Text Codecs
//!
//! Stateless encoders shared by every chain deriver:
//!
//! - **Base58Check**: version-prefixed payload + 4-byte double-SHA256 checksum (BTC/FLO keys, FLO addresses).
//! - **Bech32**: 5-bit word encoding with checksum (BTC segwit addresses, `suiprivkey` exports),
//!   plus the shared [`convert_bits`] regrouping routine.
//! - **Hex**: lowercase hex helpers mapped into the crate error type.

pub mod base58check;
pub mod bech32;

pub use self::base58check::{base58check_decode, base58check_encode};
pub use self::bech32::{bech32_decode, bech32_encode, convert_bits, from_words, to_words, u5};

use crate::error::{CodecError, WalletResult};

/// Lowercase hex, no `0x` prefix.
#[inline]
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode hex (either case, optional `0x` prefix).
pub fn decode_hex(text: &str) -> WalletResult<Vec<u8>> {
    let stripped = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    hex::decode(stripped).map_err(|e| CodecError::InvalidHex(e.to_string()).into())
}

/// `true` when every character is an ASCII hex digit (and there is at least one).
#[inline]
pub fn is_hex(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_hexdigit())
}
