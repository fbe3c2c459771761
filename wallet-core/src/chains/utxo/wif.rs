// wallet-core/src/chains/utxo/wif.rs
//
// Wallet Import Format (WIF)
// payload = [private_key_version] ++ scalar (32B) ++ [0x01 nếu compressed]
// text    = Base58Check(payload)

use crate::codec::{base58check_decode, base58check_encode};
use crate::crypto::profiles::NetworkVersionProfile;
use crate::crypto::scalar::PrivateScalar;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

const COMPRESSED_FLAG: u8 = 0x01;

/// Decoded WIF body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWif {
    pub scalar: PrivateScalar,
    pub compressed: bool,
    /// Leading version byte, kept as a network hint.
    pub version: u8,
}

pub struct Wif;

impl Wif {
    /// Encode `scalar` with the profile's private-key version byte.
    pub fn encode(
        scalar: &PrivateScalar,
        compressed: bool,
        profile: &NetworkVersionProfile,
    ) -> Zeroizing<String> {
        let mut payload = Zeroizing::new(Vec::with_capacity(34));
        payload.push(profile.private_key);
        payload.extend_from_slice(scalar.as_bytes());
        if compressed {
            payload.push(COMPRESSED_FLAG);
        }
        Zeroizing::new(base58check_encode(&payload))
    }

    /// Decode any WIF regardless of version byte.
    ///
    /// The body after the version byte must be 32 bytes, or 33 bytes ending
    /// in `0x01` (compressed public key convention).
    pub fn decode(text: &str) -> WalletResult<DecodedWif> {
        let payload = Zeroizing::new(base58check_decode(text)?);
        let (version, body) = payload.split_first().ok_or_else(|| {
            CryptoError::InvalidKeyFormat("empty WIF payload".to_string())
        })?;

        let (key, compressed) = match body {
            [key @ .., COMPRESSED_FLAG] if key.len() == PrivateScalar::LEN => (key, true),
            key if key.len() == PrivateScalar::LEN => (key, false),
            other => {
                return Err(CryptoError::InvalidKeyFormat(format!(
                    "WIF body must be 32 or 33 bytes, got {}",
                    other.len()
                ))
                .into())
            }
        };

        Ok(DecodedWif {
            scalar: PrivateScalar::from_slice(key)?,
            compressed,
            version: *version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, WalletError};

    const KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";
    const WIF_UNCOMPRESSED: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
    const WIF_COMPRESSED: &str = "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617";

    #[test]
    fn test_encode_bitcoin_vectors() {
        let scalar = PrivateScalar::from_hex(KEY).unwrap();
        let profile = NetworkVersionProfile::BTC;
        assert_eq!(Wif::encode(&scalar, false, &profile).as_str(), WIF_UNCOMPRESSED);
        assert_eq!(Wif::encode(&scalar, true, &profile).as_str(), WIF_COMPRESSED);
    }

    #[test]
    fn test_decode_compression_flag() {
        let decoded = Wif::decode(WIF_COMPRESSED).unwrap();
        assert!(decoded.compressed);
        assert_eq!(decoded.version, 0x80);
        assert_eq!(decoded.scalar.to_hex().as_str(), KEY);

        let decoded = Wif::decode(WIF_UNCOMPRESSED).unwrap();
        assert!(!decoded.compressed);
        assert_eq!(decoded.scalar.to_hex().as_str(), KEY);
    }

    #[test]
    fn test_flo_roundtrip() {
        let scalar = PrivateScalar::from_hex(KEY).unwrap();
        let wif = Wif::encode(&scalar, true, &NetworkVersionProfile::FLO);
        let decoded = Wif::decode(&wif).unwrap();
        assert_eq!(decoded.version, 0xa3);
        assert_eq!(decoded.scalar, scalar);
        assert!(decoded.compressed);
    }

    #[test]
    fn test_bad_length_rejected() {
        // Base58Check hợp lệ nhưng chỉ có 20 bytes body
        let text = base58check_encode(&[0x80; 21]);
        assert!(matches!(
            Wif::decode(&text),
            Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));
    }

    #[test]
    fn test_bad_checksum() {
        let mut chars: Vec<char> = WIF_COMPRESSED.chars().collect();
        chars[10] = if chars[10] == 'z' { 'y' } else { 'z' };
        let corrupted: String = chars.into_iter().collect();
        assert_eq!(
            Wif::decode(&corrupted),
            Err(WalletError::Codec(CodecError::ChecksumMismatch))
        );
    }
}
