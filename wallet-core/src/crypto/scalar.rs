// wallet-core/src/crypto/scalar.rs
//
// PrivateScalar - 32 bytes secret, nguồn gốc của mọi key trên 3 chains.
//
// # Security
// - `Zeroizing<[u8; 32]>`: tự động ghi đè bằng 0 khi drop
// - Custom Debug: KHÔNG BAO GIỜ in ra bytes
// - Chỉ xuất ra ngoài qua các hàm export tường minh (`to_hex`, WIF, suiprivkey)

use crate::codec;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

/// Canonical 32-byte secret (secp256k1 scalar / Ed25519 seed).
///
/// Range validation is left to the curve library that consumes it.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateScalar(Zeroizing<[u8; 32]>);

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateScalar([REDACTED])")
    }
}

impl PrivateScalar {
    pub const LEN: usize = 32;

    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Copy from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> WalletResult<Self> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKeyFormat(format!(
                "expected {} key bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Ok(Self::from_bytes(array))
    }

    /// Parse exactly 64 hex characters.
    pub fn from_hex(text: &str) -> WalletResult<Self> {
        let bytes = Zeroizing::new(codec::decode_hex(text)?);
        Self::from_slice(&bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Explicit export as lowercase hex.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::encode_hex(&*self.0))
    }
}
