// wallet-core/src/lib.rs

//! Multi-chain key core.
//!
//! One secret (WIF, raw hex, `suiprivkey1...` or nothing) becomes identities
//! on BTC, FLO and SUI. SUI additionally gets a build → dry-run → sign →
//! execute transfer pipeline, balance lookup and merged history.

pub mod api;
pub mod chains;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod network;

pub use chains::ChainId;
pub use config::WalletConfig;
pub use error::{WalletError, WalletResult};
