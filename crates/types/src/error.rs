use thiserror::Error;

use crate::contract::ContractKind;

/// Why an identifier failed to parse.
///
/// Identifiers carry their own integrity data, so none of these failures
/// is transient; callers should treat the input as unusable rather than
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("wrong length: expected {expected} bytes, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("unknown version byte {0:#04x}")]
    UnknownVersion(u8),
    #[error("unknown chain tag {0:#04x}")]
    UnknownChainTag(u8),
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Contract kind resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("unknown contract kind {0:?}")]
    UnknownKind(String),
    #[error("contract kind {0:?} has no client-side support")]
    Unsupported(ContractKind),
}

/// Amount conversion failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("amount {amount} is finer than the granularity 1/{unity}")]
    BelowGranularity { amount: f64, unity: u64 },
    #[error("amount {amount} is outside the representable range at unity {unity}")]
    OutOfRange { amount: f64, unity: u64 },
}
