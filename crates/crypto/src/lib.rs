//! Signing layer of the Corvus client SDK.
//!
//! Implements the chain's Curve25519 signature scheme over its own field
//! and group arithmetic: Montgomery-form public keys, 64-byte signatures
//! carrying the key's sign bit, deterministic domain-separated nonces.
//! On top of the single-party primitive sits the N-party aggregated
//! protocol, which produces one such signature from N secret holders.

mod error;
mod field;
mod keys;
mod multisig;
mod point;
mod sign;

pub use error::{CryptoError, CurveError};
pub use keys::KeyPair;
pub use multisig::{
    aggregate_nonce, aggregate_public_key, combine, verify_payload_aggregated, Participant,
    PartialSignature,
};
pub use point::EdwardsPoint;
pub use sign::{sign, sign_payload, sign_with_os_rng, verify, verify_payload};
