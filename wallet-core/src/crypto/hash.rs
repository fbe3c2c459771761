// wallet-core/src/crypto/hash.rs
//
// Hash primitives dùng cho address derivation
// - HASH160 = RIPEMD160(SHA256(x))       → BTC / FLO
// - BLAKE2b-256                          → SUI

use blake2::digest::consts::U32;
use blake2::Blake2b;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

type Blake2b256 = Blake2b<U32>;

#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// RIPEMD160(SHA256(data))
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// BLAKE2b with a 32-byte output.
#[inline]
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}
