// wallet-core/src/chains/utxo/address.rs
//
// UTXO Address Module - BTC (chain A) & FLO (chain B)
//
// # Flow
// scalar → secp256k1 pubkey → HASH160 (20B) → text encoding
//   - P2PKH  : Base58Check([pubkey_hash_version] ++ hash160)          (FLO: "F...")
//   - P2WPKH : Bech32(hrp, [0] ++ convert_bits(hash160, 8 → 5, pad))  (BTC: "bc1q...")

use crate::codec::{base58check_decode, base58check_encode, bech32, u5};
use crate::crypto::hash::hash160;
use crate::crypto::profiles::NetworkVersionProfile;
use crate::error::{CodecError, WalletResult};

const WITNESS_V0: u8 = 0;

pub struct UtxoAddress;

impl UtxoAddress {
    /// Legacy pay-to-pubkey-hash address.
    pub fn p2pkh(public_key: &[u8], profile: &NetworkVersionProfile) -> String {
        Self::p2pkh_from_hash(&hash160(public_key), profile)
    }

    /// P2PKH from an already computed HASH160.
    pub fn p2pkh_from_hash(hash: &[u8; 20], profile: &NetworkVersionProfile) -> String {
        let mut payload = Vec::with_capacity(21);
        payload.push(profile.pubkey_hash);
        payload.extend_from_slice(hash);
        base58check_encode(&payload)
    }

    /// Native segwit v0 pay-to-witness-pubkey-hash address.
    pub fn p2wpkh(public_key: &[u8], hrp: &str) -> WalletResult<String> {
        let program = hash160(public_key);
        let mut words = Vec::with_capacity(33);
        let version =
            u5::try_from_u8(WITNESS_V0).map_err(|e| CodecError::InvalidBech32(e.to_string()))?;
        words.push(version);
        words.extend(bech32::to_words(&program)?);
        bech32::bech32_encode(hrp, &words)
    }

    /// Check a P2PKH address against a profile's version byte.
    pub fn is_valid_p2pkh(address: &str, profile: &NetworkVersionProfile) -> bool {
        match base58check_decode(address) {
            Ok(payload) => payload.len() == 21 && payload[0] == profile.pubkey_hash,
            Err(_) => false,
        }
    }

    /// Check a segwit v0 20-byte program address for `hrp`.
    pub fn is_valid_p2wpkh(address: &str, hrp: &str) -> bool {
        let Ok(words) = bech32::bech32_decode_with_hrp(address, hrp) else {
            return false;
        };
        match words.split_first() {
            Some((version, program)) if version.to_u8() == WITNESS_V0 => {
                matches!(bech32::from_words(program), Ok(bytes) if bytes.len() == 20)
            }
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // pubkey của private key = 1 (generator point)
    const G_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_bitcoin_p2pkh_vector() {
        let pubkey = hex::decode(G_COMPRESSED).unwrap();
        let address = UtxoAddress::p2pkh(&pubkey, &NetworkVersionProfile::BTC);
        assert_eq!(address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_bitcoin_p2wpkh_vector() {
        let pubkey = hex::decode(G_COMPRESSED).unwrap();
        let address = UtxoAddress::p2wpkh(&pubkey, "bc").unwrap();
        assert_eq!(address, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
        assert!(UtxoAddress::is_valid_p2wpkh(&address, "bc"));
        assert!(!UtxoAddress::is_valid_p2wpkh(&address, "tb"));
    }

    #[test]
    fn test_flo_address_prefix() {
        let pubkey = hex::decode(G_COMPRESSED).unwrap();
        let address = UtxoAddress::p2pkh(&pubkey, &NetworkVersionProfile::FLO);
        // Version 0x23 → địa chỉ FLO bắt đầu bằng 'F'
        assert!(address.starts_with('F'), "{}", address);
        assert!(UtxoAddress::is_valid_p2pkh(&address, &NetworkVersionProfile::FLO));
        assert!(!UtxoAddress::is_valid_p2pkh(&address, &NetworkVersionProfile::BTC));
    }

    #[test]
    fn test_profiles_give_different_addresses() {
        let pubkey = hex::decode(G_COMPRESSED).unwrap();
        let btc = UtxoAddress::p2pkh(&pubkey, &NetworkVersionProfile::BTC);
        let flo = UtxoAddress::p2pkh(&pubkey, &NetworkVersionProfile::FLO);
        assert_ne!(btc, flo);
    }
}
