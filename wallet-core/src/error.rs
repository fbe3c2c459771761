use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Codec Error: {0}")]
    Codec(#[from] CodecError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Transfer Error: {0}")]
    Transfer(#[from] TransferError),

    #[error("Network Error: {0}")]
    Network(#[from] NetworkError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Base58Check checksum mismatch.")]
    ChecksumMismatch,

    #[error("Invalid Base58 string: {0}")]
    InvalidBase58(String),

    #[error("Invalid padding in bit group conversion.")]
    InvalidPadding,

    #[error("Bech32 checksum validation failed.")]
    InvalidChecksum,

    #[error("Bech32 string mixes upper and lower case.")]
    MixedCase,

    #[error("Invalid Bech32 string: {0}")]
    InvalidBech32(String),

    #[error("Unexpected human-readable part: expected '{expected}', got '{found}'")]
    UnexpectedHrp { expected: String, found: String },

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Unsupported key scheme flag: 0x{0:02x}")]
    UnsupportedKeyScheme(u8),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}

/// Pipeline stage a transfer failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStage {
    Requested,
    Built,
    Estimated,
    Signed,
    Submitted,
}

impl std::fmt::Display for TransferStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransferStage::Requested => "requested",
            TransferStage::Built => "built",
            TransferStage::Estimated => "estimated",
            TransferStage::Signed => "signed",
            TransferStage::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("No spendable coin objects for sender.")]
    NoFundsAvailable,

    #[error("Build failed: {0}")]
    BuildFailed(String),

    #[error("Estimation failed: {0}")]
    EstimationFailed(String),

    #[error("Signing failed: {0}")]
    SignFailed(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The execute request may have reached the node but no usable answer came
    /// back; the transaction may or may not be on chain.
    #[error("Outcome unknown after submission: {0}")]
    Indeterminate(String),

    #[error("Network unavailable during '{stage}' stage: {source}")]
    Network {
        stage: TransferStage,
        #[source]
        source: NetworkError,
    },
}

impl TransferError {
    /// Stage tag (the state the pipeline was leaving when it failed).
    pub fn stage(&self) -> TransferStage {
        match self {
            TransferError::InvalidAmount(_)
            | TransferError::InvalidRecipient(_)
            | TransferError::NoFundsAvailable
            | TransferError::BuildFailed(_) => TransferStage::Requested,
            TransferError::EstimationFailed(_) => TransferStage::Built,
            TransferError::SignFailed(_) => TransferStage::Estimated,
            TransferError::ExecutionFailed(_) | TransferError::Indeterminate(_) => {
                TransferStage::Submitted
            }
            TransferError::Network { stage, .. } => *stage,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// No connection was made; the request never left the client.
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Node unreachable: {0}")]
    Unavailable(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
}

impl NetworkError {
    /// Transport-level failures, as opposed to an `error` reported by the node.
    pub fn is_transport(&self) -> bool {
        !matches!(self, NetworkError::Rpc { .. })
    }

    /// Whether the request may have been delivered to the node.
    pub fn may_have_reached_node(&self) -> bool {
        !matches!(self, NetworkError::Connect(_))
    }
}
