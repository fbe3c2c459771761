// wallet-core/src/chains/sui/mod.rs

//! SUI Chain Support
//!
//! # Key Features
//! - **Address Derivation**: `0x` + BLAKE2b-256(flag ++ Ed25519 pubkey) via [`SuiAddress`].
//! - **Key Export**: Bech32 `suiprivkey1...` import/export via [`SuiPrivateKey`].
//! - **Signing**: Ed25519 signatures in SUI wire form via [`SuiSigner`].
//! - **Transfers**: build → dry-run → sign → execute pipeline via [`TransferPipeline`].

pub mod address;
pub mod keypair;
pub mod signer;
pub mod transfer;

// Re-exports for cleaner API access
pub use address::SuiAddress;
pub use keypair::SuiPrivateKey;
pub use signer::{SuiSignature, SuiSigner};
pub use transfer::{PreparedTransfer, TransferPipeline, TransferRequest, TransferResult};

/// Số decimals của SUI (1 SUI = 10^9 MIST)
pub const SUI_DECIMALS: u32 = 9;

/// Coin type của native asset
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";
