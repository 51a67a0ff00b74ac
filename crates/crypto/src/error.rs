use corvus_codec::CodecError;
use thiserror::Error;

/// Point and scalar decoding failures. Deterministic, like everything
/// else in this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The encoding names no point on the curve, or a non-canonical one.
    #[error("invalid curve point encoding")]
    InvalidPoint,
    /// The scalar encoding is not a canonical residue below the group
    /// order.
    #[error("invalid scalar encoding")]
    InvalidScalar,
}

/// Failures of the payload-level signing helpers, which sit on top of
/// both the codec and the curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}
