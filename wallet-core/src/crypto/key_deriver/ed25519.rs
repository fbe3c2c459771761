// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Keypair from Seed
//
// Dùng cho: SUI (chain C)
// Ed25519 chấp nhận MỌI 32 bytes làm seed, nên không có bước validate range.

use crate::crypto::scalar::PrivateScalar;
use ed25519_dalek::SigningKey;

/// Ed25519 Deriver - seed (32B) → keypair
///
/// # Security
/// - `SigningKey` của ed25519-dalek zeroize khi drop
/// - Không lưu seed ở đâu khác ngoài `SigningKey`
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// Signing key (expanded secret + public key) for `seed`.
    #[inline]
    pub fn signing_key(seed: &PrivateScalar) -> SigningKey {
        SigningKey::from_bytes(seed.as_bytes())
    }

    /// 32-byte compressed Edwards public key.
    #[inline]
    pub fn public_key(seed: &PrivateScalar) -> [u8; 32] {
        Self::signing_key(seed).verifying_key().to_bytes()
    }
}
