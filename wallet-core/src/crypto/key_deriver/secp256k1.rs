// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Public Key Derivation
//
// Dùng cho: BTC (chain A), FLO (chain B)
// scalar (32B) → public key SEC1 (33B compressed / 65B uncompressed)

use crate::crypto::scalar::PrivateScalar;
use crate::error::{CryptoError, WalletResult};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use rand::rngs::OsRng;

/// secp256k1 Deriver
///
/// # Security
/// - `SecretKey` của k256 tự zeroize khi drop
/// - Scalar ngoài khoảng [1, n) bị từ chối tại đây (validation deferred tới curve library)
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// SEC1-encoded public key for `scalar`.
    ///
    /// # Arguments
    /// * `scalar` - 32-byte private scalar
    /// * `compressed` - `true` → 33 bytes (`02`/`03` prefix), `false` → 65 bytes (`04` prefix)
    pub fn public_key(scalar: &PrivateScalar, compressed: bool) -> WalletResult<Vec<u8>> {
        let secret = Self::secret_key(scalar)?;
        let point = secret.public_key().to_encoded_point(compressed);
        Ok(point.as_bytes().to_vec())
    }

    /// Fresh scalar from the OS CSPRNG, always inside the curve order.
    pub fn random_scalar() -> PrivateScalar {
        let secret = SecretKey::random(&mut OsRng);
        PrivateScalar::from_bytes(secret.to_bytes().into())
    }

    /// Kiểm tra scalar có nằm trong [1, n) không
    #[inline]
    pub fn is_valid_scalar(scalar: &PrivateScalar) -> bool {
        Self::secret_key(scalar).is_ok()
    }

    fn secret_key(scalar: &PrivateScalar) -> WalletResult<SecretKey> {
        SecretKey::from_slice(scalar.as_bytes()).map_err(|e| {
            CryptoError::InvalidKeyFormat(format!("Invalid secp256k1 private key: {}", e)).into()
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
