use corvus_types::IdentifierError;
use thiserror::Error;

/// Decode and encode failures for the wire formats. All deterministic:
/// the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("unknown data entry tag {0}")]
    UnknownEntryTag(u8),
    #[error("input truncated")]
    TruncatedInput,
    #[error("length prefix overflow")]
    LengthOverflow,
    #[error("string payload is not valid utf-8")]
    InvalidString,
    #[error("bool payload byte {0:#04x} is neither 0 nor 1")]
    InvalidBool(u8),
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
}
