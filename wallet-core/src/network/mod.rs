// wallet-core/src/network/mod.rs
//
// Network Module - SUI fullnode access
//
// Cung cấp:
// - Traits: `RpcTransport` (JSON-RPC round trip) và `SuiProvider` (typed ops)
// - `HttpTransport`: reqwest + timeout
// - `SuiClient`: SuiProvider trên bất kỳ transport nào
// - `TransactionHistory`: lịch sử gộp Sent/Received

pub mod client;
pub mod history;
pub mod models;
pub mod rpc;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

// Re-export cho convenience
pub use client::SuiClient;
pub use history::TransactionHistory;
pub use models::*;
pub use rpc::HttpTransport;
pub use traits::*;
