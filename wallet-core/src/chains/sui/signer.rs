// wallet-core/src/chains/sui/signer.rs
//
// SUI Signer - Ed25519 offline signing
//
// Serialized signature (định dạng node SUI chấp nhận):
//   flag (1B, 0x00) ++ signature (64B) ++ public key (32B)  → base64

use super::address::{SuiAddress, ED25519_FLAG};
use crate::crypto::key_deriver::Ed25519Deriver;
use crate::crypto::scalar::PrivateScalar;
use crate::error::{TransferError, WalletResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};

/// Ed25519 signer for one SUI account.
///
/// # Security
/// - `SigningKey` zeroize khi drop
/// - Custom Debug không hiển thị key
pub struct SuiSigner {
    signing_key: SigningKey,
    address: SuiAddress,
}

impl std::fmt::Debug for SuiSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuiSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Signature in SUI wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiSignature {
    bytes: [u8; 97],
}

impl SuiSignature {
    pub const LEN: usize = 1 + 64 + 32;

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 97] {
        &self.bytes
    }

    /// Base64 string as expected by `sui_executeTransactionBlock`.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.bytes)
    }

    fn signature(&self) -> Signature {
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&self.bytes[1..65]);
        Signature::from_bytes(&raw)
    }
}

impl SuiSigner {
    pub fn new(seed: &PrivateScalar) -> Self {
        let signing_key = Ed25519Deriver::signing_key(seed);
        let address = SuiAddress::from_ed25519_public_key(&signing_key.verifying_key().to_bytes());
        Self {
            signing_key,
            address,
        }
    }

    #[inline]
    pub fn address(&self) -> SuiAddress {
        self.address
    }

    #[inline]
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign the transaction bytes exactly as the node built them.
    pub fn sign(&self, tx_bytes: &[u8]) -> WalletResult<SuiSignature> {
        if tx_bytes.is_empty() {
            return Err(TransferError::SignFailed("empty transaction bytes".into()).into());
        }
        let signature = self
            .signing_key
            .try_sign(tx_bytes)
            .map_err(|e| TransferError::SignFailed(e.to_string()))?;

        let mut bytes = [0u8; SuiSignature::LEN];
        bytes[0] = ED25519_FLAG;
        bytes[1..65].copy_from_slice(&signature.to_bytes());
        bytes[65..].copy_from_slice(&self.public_key());
        Ok(SuiSignature { bytes })
    }

    /// Verify a signature produced by this signer.
    pub fn verify(&self, tx_bytes: &[u8], signature: &SuiSignature) -> bool {
        signature.bytes[0] == ED25519_FLAG
            && signature.bytes[65..] == self.public_key()
            && self
                .signing_key
                .verifying_key()
                .verify(tx_bytes, &signature.signature())
                .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    // RFC 8032 TEST 2 (message = 0x72)
    const RFC8032_SEED_2: &str = "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb";
    const RFC8032_SIG_72: &str = "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00";

    fn signer() -> SuiSigner {
        SuiSigner::new(&PrivateScalar::from_hex(SEED).unwrap())
    }

    #[test]
    fn test_wire_layout() {
        let signer = signer();
        let sig = signer.sign(&[0x72]).unwrap();
        let bytes = sig.as_bytes();
        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[65..], &signer.public_key());
        assert_eq!(BASE64.decode(sig.to_base64()).unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_signature_over_raw_bytes() {
        // Ký trực tiếp bytes, không hash thêm → khớp vector RFC 8032
        let signer = SuiSigner::new(&PrivateScalar::from_hex(RFC8032_SEED_2).unwrap());
        let sig = signer.sign(&[0x72]).unwrap();
        assert_eq!(hex::encode(&sig.as_bytes()[1..65]), RFC8032_SIG_72);
    }

    #[test]
    fn test_verify() {
        let signer = signer();
        let tx = b"transaction bytes";
        let sig = signer.sign(tx).unwrap();
        assert!(signer.verify(tx, &sig));
        assert!(!signer.verify(b"other bytes", &sig));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(
            signer().sign(&[]),
            Err(WalletError::Transfer(TransferError::SignFailed(_)))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let debug = format!("{:?}", signer());
        assert!(!debug.contains(SEED));
        assert!(debug.contains("SuiSigner"));
    }
}
