// wallet-core/src/chains/sui/address.rs
//
// SUI Address Module
//
// # Flow:  seed (32B) → Ed25519 pubkey (32B) → BLAKE2b-256(0x00 ++ pubkey) → "0x" + hex (64 chars)
// Byte 0x00 đầu tiên là flag của signature scheme Ed25519.

use crate::crypto::hash::blake2b256;
use crate::error::{TransferError, WalletError, WalletResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Signature scheme flag của Ed25519 trên SUI.
pub const ED25519_FLAG: u8 = 0x00;

/// 32-byte SUI account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiAddress([u8; 32]);

impl SuiAddress {
    pub const LEN: usize = 32;

    /// Address of an Ed25519 public key.
    pub fn from_ed25519_public_key(public_key: &[u8; 32]) -> Self {
        let mut preimage = [0u8; 33];
        preimage[0] = ED25519_FLAG;
        preimage[1..].copy_from_slice(public_key);
        Self(blake2b256(&preimage))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Case-insensitive comparison against any textual form.
    pub fn matches(&self, text: &str) -> bool {
        text.parse::<SuiAddress>().map(|a| a == *self).unwrap_or(false)
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self)
    }
}

impl FromStr for SuiAddress {
    type Err = WalletError;

    /// Accepts `0x` followed by 1..=64 hex digits; short forms are left-padded.
    fn from_str(text: &str) -> WalletResult<Self> {
        let invalid = || TransferError::InvalidRecipient(text.to_string());
        let digits = text
            .trim()
            .strip_prefix("0x")
            .or_else(|| text.trim().strip_prefix("0X"))
            .ok_or_else(invalid)?;
        if digits.is_empty() || digits.len() > 64 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid().into());
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }
}

impl Serialize for SuiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
