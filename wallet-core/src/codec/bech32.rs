// wallet-core/src/codec/bech32.rs
//
// Bech32 (BIP-173) encode/decode + bit-group conversion
//
// Dùng cho:
// - BTC native segwit address: hrp "bc", words = [witness_version] ++ convert(hash160, 8 → 5)
// - SUI private key export:    hrp "suiprivkey", words = convert(flag ++ seed, 8 → 5)
//
// Encode (8 → 5, pad) và decode (5 → 8, no pad) dùng CHUNG một routine `convert_bits`.

use crate::error::{CodecError, WalletError, WalletResult};
use ::bech32::Variant;

pub use ::bech32::u5;

/// Regroup a bit stream between `from`-bit and `to`-bit alignments.
///
/// With `pad = true` the final partial group is zero-padded. With
/// `pad = false`, leftover bits that are `>= from` or non-zero fail with
/// [`CodecError::InvalidPadding`].
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> WalletResult<Vec<u8>> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(CodecError::InvalidBech32(format!(
            "bit widths must be within 1..=8, got {} -> {}",
            from, to
        ))
        .into());
    }
    ::bech32::convert_bits(data, from, to, pad).map_err(map_bech32_error)
}

/// Bytes → 5-bit words (8 → 5, padded).
pub fn to_words(bytes: &[u8]) -> WalletResult<Vec<u5>> {
    convert_bits(bytes, 8, 5, true)?
        .into_iter()
        .map(|w| u5::try_from_u8(w).map_err(map_bech32_error))
        .collect()
}

/// 5-bit words → bytes (5 → 8, no padding allowed).
pub fn from_words(words: &[u5]) -> WalletResult<Vec<u8>> {
    let raw: Vec<u8> = words.iter().map(|w| w.to_u8()).collect();
    convert_bits(&raw, 5, 8, false)
}

/// Standard Bech32 (not Bech32m) encoding.
pub fn bech32_encode(hrp: &str, words: &[u5]) -> WalletResult<String> {
    ::bech32::encode(hrp, words, Variant::Bech32).map_err(map_bech32_error)
}

/// Decode a Bech32 string into `(hrp, words)`.
///
/// Mixed-case input is rejected; a Bech32m checksum is reported as
/// [`CodecError::InvalidChecksum`].
pub fn bech32_decode(text: &str) -> WalletResult<(String, Vec<u5>)> {
    let (hrp, words, variant) = ::bech32::decode(text).map_err(map_bech32_error)?;
    if variant != Variant::Bech32 {
        return Err(CodecError::InvalidChecksum.into());
    }
    Ok((hrp, words))
}

/// Decode and require a specific human-readable part.
pub fn bech32_decode_with_hrp(text: &str, expected_hrp: &str) -> WalletResult<Vec<u5>> {
    let (hrp, words) = bech32_decode(text)?;
    if hrp != expected_hrp {
        return Err(CodecError::UnexpectedHrp {
            expected: expected_hrp.to_string(),
            found: hrp,
        }
        .into());
    }
    Ok(words)
}

fn map_bech32_error(err: ::bech32::Error) -> WalletError {
    match err {
        ::bech32::Error::InvalidChecksum => CodecError::InvalidChecksum,
        ::bech32::Error::InvalidPadding => CodecError::InvalidPadding,
        ::bech32::Error::MixedCase => CodecError::MixedCase,
        other => CodecError::InvalidBech32(other.to_string()),
    }
    .into()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // BIP-173 P2WPKH vector (pubkey 0279be66...f81798)
    const BIP173_ADDRESS: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
    const BIP173_PROGRAM: &str = "751e76e8199196d454941c45d1b3a323f1433bd6";

    #[test]
    fn test_bip173_vector_decode() {
        let (hrp, words) = bech32_decode(BIP173_ADDRESS).unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(words[0].to_u8(), 0);
        let program = from_words(&words[1..]).unwrap();
        assert_eq!(hex::encode(program), BIP173_PROGRAM);
    }

    #[test]
    fn test_bip173_vector_encode() {
        let mut words = vec![u5::try_from_u8(0).unwrap()];
        words.extend(to_words(&hex::decode(BIP173_PROGRAM).unwrap()).unwrap());
        assert_eq!(bech32_encode("bc", &words).unwrap(), BIP173_ADDRESS);
    }

    #[test]
    fn test_convert_roundtrip() {
        let samples: [&[u8]; 4] = [&[0x00], &[0xff, 0x01], &[0x00; 33], &[0xa5; 32]];
        for bytes in samples {
            let words = convert_bits(bytes, 8, 5, true).unwrap();
            assert!(words.iter().all(|w| *w < 32));
            let back = convert_bits(&words, 5, 8, false).unwrap();
            assert_eq!(back, bytes);
        }
    }

    #[test]
    fn test_convert_invalid_padding() {
        // 3 words = 15 bits → 1 byte + 7 leftover bits (>= 5) → InvalidPadding
        let result = convert_bits(&[1, 2, 3], 5, 8, false);
        assert_eq!(result, Err(CodecError::InvalidPadding.into()));

        // 2 words = 10 bits → 1 byte + 2 leftover bits, non-zero → InvalidPadding
        let result = convert_bits(&[0, 1], 5, 8, false);
        assert_eq!(result, Err(CodecError::InvalidPadding.into()));
    }

    #[test]
    fn test_convert_rejects_bad_widths() {
        assert!(convert_bits(&[1], 0, 5, true).is_err());
        assert!(convert_bits(&[1], 8, 9, true).is_err());
    }

    #[test]
    fn test_checksum_corruption() {
        let mut corrupted: Vec<char> = BIP173_ADDRESS.chars().collect();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == 'q' { 'p' } else { 'q' };
        let corrupted: String = corrupted.into_iter().collect();
        assert_eq!(
            bech32_decode(&corrupted),
            Err(CodecError::InvalidChecksum.into())
        );
    }

    #[test]
    fn test_mixed_case_rejected() {
        let mixed = "bc1qW508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
        assert_eq!(bech32_decode(mixed), Err(CodecError::MixedCase.into()));

        // Toàn bộ chữ hoa vẫn hợp lệ
        let (hrp, _) = bech32_decode(&BIP173_ADDRESS.to_uppercase()).unwrap();
        assert_eq!(hrp, "bc");
    }

    #[test]
    fn test_unexpected_hrp() {
        let result = bech32_decode_with_hrp(BIP173_ADDRESS, "suiprivkey");
        assert!(matches!(
            result,
            Err(WalletError::Codec(CodecError::UnexpectedHrp { .. }))
        ));
    }
}
