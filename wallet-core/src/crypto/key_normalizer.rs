// wallet-core/src/crypto/key_normalizer.rs
//
// Key Normalizer - nhận secret ở bất kỳ định dạng nào, trả về scalar 32 bytes.
//
// ┌──────────────────────────┬──────────────────────────────────────────────┐
// │ Input (trimmed)          │ Xử lý                                        │
// ├──────────────────────────┼──────────────────────────────────────────────┤
// │ "" / None                │ Sinh key mới                                 │
// │ "suiprivkey1..."         │ Bech32 → [flag 0x00] ++ seed                 │
// │ hex, 64 hoặc 128 ký tự   │ 64 ký tự đầu = scalar                        │
// │ còn lại                  │ WIF (Base58Check, BTC/FLO/...)               │
// └──────────────────────────┴──────────────────────────────────────────────┘
//
// Permissive mode (mặc định): input lỗi → sinh key mới, KHÔNG báo lỗi.
// Strict mode: input lỗi → trả về lỗi cho caller.

use crate::chains::sui::keypair::{SuiPrivateKey, SUI_PRIVATE_KEY_PREFIX};
use crate::chains::utxo::Wif;
use crate::codec;
use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::crypto::profiles::NetworkVersionProfile;
use crate::crypto::scalar::PrivateScalar;
use crate::error::WalletResult;
use serde::Serialize;

const RAW_HEX_LEN: usize = 64;

/// Detected serialization of the caller's secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputFormat {
    /// Base58Check WIF. The hint is the profile name matching the version byte,
    /// known only once the payload decodes.
    #[serde(rename_all = "camelCase")]
    LegacyWif { network_hint: Option<&'static str> },
    /// 64 hex chars, or 128 where only the first 64 are used.
    RawHex { doubled: bool },
    /// `suiprivkey1...`
    Bech32Sui,
    Empty,
}

impl InputFormat {
    /// Deterministic, input-driven classification. Never fails.
    pub fn classify(input: Option<&str>) -> InputFormat {
        let trimmed = input.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            InputFormat::Empty
        } else if trimmed.starts_with(SUI_PRIVATE_KEY_PREFIX) {
            InputFormat::Bech32Sui
        } else if codec::is_hex(trimmed)
            && (trimmed.len() == RAW_HEX_LEN || trimmed.len() == RAW_HEX_LEN * 2)
        {
            InputFormat::RawHex {
                doubled: trimmed.len() == RAW_HEX_LEN * 2,
            }
        } else {
            InputFormat::LegacyWif { network_hint: None }
        }
    }
}

/// Canonical secret plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKey {
    pub scalar: PrivateScalar,
    pub compressed: bool,
    pub format: InputFormat,
    /// `true` when the scalar was freshly generated instead of parsed.
    pub generated: bool,
}

/// Secret → canonical scalar, with a configurable fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNormalizer {
    permissive_fallback: bool,
}

impl Default for KeyNormalizer {
    fn default() -> Self {
        Self::permissive()
    }
}

impl KeyNormalizer {
    pub const fn new(permissive_fallback: bool) -> Self {
        Self {
            permissive_fallback,
        }
    }

    /// Unparseable input silently becomes a fresh key.
    pub const fn permissive() -> Self {
        Self::new(true)
    }

    /// Unparseable input is reported as an error.
    pub const fn strict() -> Self {
        Self::new(false)
    }

    #[inline]
    pub fn is_permissive(&self) -> bool {
        self.permissive_fallback
    }

    /// Apply the configured policy.
    ///
    /// Empty input always generates a fresh key. Only strict mode can fail.
    pub fn resolve(&self, input: Option<&str>) -> WalletResult<NormalizedKey> {
        match Self::parse(input) {
            Ok(key) => Ok(key),
            Err(e) if self.permissive_fallback => {
                tracing::warn!(
                    format = ?InputFormat::classify(input),
                    error = %e,
                    "unparseable secret, generating a fresh key"
                );
                Ok(Self::generate())
            }
            Err(e) => Err(e),
        }
    }

    /// Permissive normalization. Never fails.
    pub fn normalize(input: Option<&str>) -> NormalizedKey {
        Self::permissive()
            .resolve(input)
            .unwrap_or_else(|_| Self::generate())
    }

    /// Strict parse: the error of the detected format is returned as-is.
    pub fn parse(input: Option<&str>) -> WalletResult<NormalizedKey> {
        let format = InputFormat::classify(input);
        let trimmed = input.map(str::trim).unwrap_or_default();

        match format {
            InputFormat::Empty => Ok(Self::generate()),
            InputFormat::Bech32Sui => Ok(NormalizedKey {
                scalar: SuiPrivateKey::decode(trimmed)?,
                compressed: true,
                format,
                generated: false,
            }),
            InputFormat::RawHex { .. } => Ok(NormalizedKey {
                scalar: PrivateScalar::from_hex(&trimmed[..RAW_HEX_LEN])?,
                compressed: true,
                format,
                generated: false,
            }),
            InputFormat::LegacyWif { .. } => {
                let decoded = Wif::decode(trimmed)?;
                let network_hint =
                    NetworkVersionProfile::by_private_key_version(decoded.version).map(|p| p.name);
                Ok(NormalizedKey {
                    scalar: decoded.scalar,
                    compressed: decoded.compressed,
                    format: InputFormat::LegacyWif { network_hint },
                    generated: false,
                })
            }
        }
    }

    /// Fresh identity, taken through the same WIF path as imported keys.
    pub fn generate() -> NormalizedKey {
        let fresh = Secp256k1Deriver::random_scalar();
        let wif = Wif::encode(&fresh, true, &NetworkVersionProfile::BTC);
        let (scalar, compressed) = match Wif::decode(&wif) {
            Ok(decoded) => (decoded.scalar, decoded.compressed),
            Err(_) => (fresh, true),
        };

        NormalizedKey {
            scalar,
            compressed,
            format: InputFormat::Empty,
            generated: true,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
