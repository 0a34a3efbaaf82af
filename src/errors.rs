use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum TopicManagerError {
    /// Transaction carries no inputs
    #[error("An array of transaction inputs is required")]
    InputsRequired,

    /// Transaction carries no outputs
    #[error("Transaction outputs must be included as an array")]
    OutputsRequired,

    /// No output passed decoding, namespace and signature checks
    #[error("This transaction does not publish a valid TSP Advertisement descriptor")]
    NoValidAdvertisement,

    /// Raw transaction could not be parsed
    #[error("Transaction parse error: {0}")]
    TransactionParse(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// PushDrop decoding outside the admission path (inspection)
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecodeError),
}

/// Errors produced while decoding a PushDrop locking script
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid script hex: {0}")]
    InvalidHex(String),

    #[error("Malformed script: {0}")]
    Malformed(String),

    #[error("Script does not start with a locking public key push")]
    MissingLockingKey,

    #[error("Locking public key is not followed by OP_CHECKSIG")]
    MissingChecksig,

    #[error("Unexpected opcode {opcode} at position {position}")]
    UnexpectedOpcode { opcode: String, position: usize },

    #[error("Script does not end with OP_DROP/OP_2DROP")]
    MissingDrop,

    #[error("Script carries no signature field")]
    MissingSignature,
}

/// Signature verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid Signature")]
    SignatureMismatch,
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, TopicManagerError>;

/// Result type for PushDrop decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

impl From<config::ConfigError> for TopicManagerError {
    fn from(err: config::ConfigError) -> Self {
        TopicManagerError::Config(err.to_string())
    }
}

impl From<bitcoin::consensus::encode::Error> for TopicManagerError {
    fn from(err: bitcoin::consensus::encode::Error) -> Self {
        TopicManagerError::TransactionParse(err.to_string())
    }
}

impl From<hex::FromHexError> for TopicManagerError {
    fn from(err: hex::FromHexError) -> Self {
        TopicManagerError::TransactionParse(format!("Invalid hex: {}", err))
    }
}
