//! N-party aggregated signing.
//!
//! N secret holders jointly produce one ordinary 64-byte signature that
//! verifies under one joint public key. Three rounds: exchange public
//! contributions, exchange nonce points, exchange partial signatures.
//! Every party must see the contribution roster in the same order; the
//! coefficients, the joint key and the combined signature all hinge on
//! that ordering.
//!
//! Nothing here keeps state between rounds. The nonce scalar is
//! recomputed from (secret, message, randomness) wherever it is needed,
//! so a participant is just its secret plus derived values.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use corvus_codec::TxPayload;

use crate::error::{CryptoError, CurveError};
use crate::field::{le32, Q};
use crate::point::{basepoint, EdwardsPoint};
use crate::sign::{hash_to_scalar, verify, NONCE_DOMAIN};

/// Domain prefix of the coefficient hash. Distinct from the nonce domain
/// so the two hash families can never collide.
const COEFF_DOMAIN: [u8; 32] = [
    0xfd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff,
];

/// One signer's session state.
pub struct Participant {
    secret: [u8; 32],
    /// Raw little-endian integer of the secret, deliberately unclamped;
    /// clamped secrets make the integer coincide with what the
    /// single-party signer uses, which is how the n = 1 case stays
    /// byte-identical to a plain signature.
    scalar: BigUint,
    public: [u8; 32],
}

impl Participant {
    /// Start a signing session from a 32-byte secret.
    pub fn new(secret: [u8; 32]) -> Participant {
        let scalar = BigUint::from_bytes_le(&secret);
        let public = basepoint().scalar_mul(&scalar).compress();
        Participant {
            secret,
            scalar,
            public,
        }
    }

    /// Compressed public contribution to broadcast in round one.
    pub fn contribution(&self) -> [u8; 32] {
        self.public
    }

    /// Round-two nonce point R_i.
    ///
    /// `rand` is this party's 64-byte signing randomness for this message;
    /// the same value must be fed to [`Participant::partial_sign`], and it
    /// must never be reused for a different message.
    pub fn nonce_point(&self, msg: &[u8], rand: &[u8; 64]) -> [u8; 32] {
        let r = self.nonce_scalar(msg, rand);
        basepoint().scalar_mul(&r).compress()
    }

    /// Round-three partial signature over the aggregated nonce.
    ///
    /// `contributions` is the full round-one roster in session order and
    /// `union_r` the aggregate of all round-two nonce points.
    pub fn partial_sign(
        &self,
        msg: &[u8],
        rand: &[u8; 64],
        contributions: &[[u8; 32]],
        union_r: &[u8; 32],
    ) -> Result<PartialSignature, CurveError> {
        let union_a = aggregate_point(contributions)?.compress();
        let x = coefficient(&self.public, contributions);
        let r = self.nonce_scalar(msg, rand);
        let h = hash_to_scalar(&[union_r, &union_a, msg]);
        let sigma = (r + h * x * &self.scalar) % &*Q;
        Ok(PartialSignature(sigma))
    }

    fn nonce_scalar(&self, msg: &[u8], rand: &[u8; 64]) -> BigUint {
        hash_to_scalar(&[&NONCE_DOMAIN, &self.secret, msg, rand])
    }
}

/// One signer's scalar share of the combined signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSignature(BigUint);

impl PartialSignature {
    /// 32-byte little-endian wire form.
    pub fn to_bytes(&self) -> [u8; 32] {
        le32(&self.0)
    }

    /// Parse a wire-form share. Anything not below the group order is
    /// refused; a share that large is never the output of an honest
    /// signer.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<PartialSignature, CurveError> {
        let s = BigUint::from_bytes_le(bytes);
        if s >= *Q {
            return Err(CurveError::InvalidScalar);
        }
        Ok(PartialSignature(s))
    }
}

/// Delinearization coefficient for one contribution given the full
/// roster. Collapses to 1 for a lone participant so the aggregate equals
/// the plain signature.
fn coefficient(own: &[u8; 32], contributions: &[[u8; 32]]) -> BigUint {
    if contributions.len() == 1 {
        return BigUint::one();
    }
    let mut parts: Vec<&[u8]> = Vec::with_capacity(contributions.len() + 2);
    parts.push(&COEFF_DOMAIN);
    parts.push(own);
    for c in contributions {
        parts.push(c);
    }
    hash_to_scalar(&parts)
}

/// Joint verification point, the coefficient-weighted sum of every
/// contribution. Anyone holding the roster can compute it; no secret
/// enters.
fn aggregate_point(contributions: &[[u8; 32]]) -> Result<EdwardsPoint, CurveError> {
    if contributions.is_empty() {
        return Err(CurveError::InvalidPoint);
    }
    let mut acc = EdwardsPoint::identity();
    for c in contributions {
        let x = coefficient(c, contributions);
        let point = EdwardsPoint::decompress(c)?;
        acc = acc.add(&point.scalar_mul(&x));
    }
    Ok(acc)
}

/// Montgomery-form public key the chain sees for the group.
pub fn aggregate_public_key(contributions: &[[u8; 32]]) -> Result<[u8; 32], CurveError> {
    let union_a = aggregate_point(contributions)?;
    Ok(le32(&union_a.montgomery_u()))
}

/// Aggregate of the round-two nonce points.
pub fn aggregate_nonce(nonce_points: &[[u8; 32]]) -> Result<[u8; 32], CurveError> {
    if nonce_points.is_empty() {
        return Err(CurveError::InvalidPoint);
    }
    let mut acc = EdwardsPoint::identity();
    for r in nonce_points {
        acc = acc.add(&EdwardsPoint::decompress(r)?);
    }
    Ok(acc.compress())
}

/// Fold the partial signatures into the final 64-byte signature.
///
/// The result carries the joint key's sign bit in its top bit, exactly
/// like a single-party signature, and verifies under
/// [`aggregate_public_key`] of the same roster.
pub fn combine(
    union_r: &[u8; 32],
    contributions: &[[u8; 32]],
    partials: &[PartialSignature],
) -> Result<[u8; 64], CurveError> {
    let union_a = aggregate_point(contributions)?;
    let sign_bit = union_a.compress()[31] & 0x80;

    let mut sigma = BigUint::zero();
    for partial in partials {
        sigma = (sigma + &partial.0) % &*Q;
    }

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(union_r);
    sig[32..].copy_from_slice(&le32(&sigma));
    sig[63] |= sign_bit;
    Ok(sig)
}

/// Verify a combined signature over a payload's canonical signing bytes,
/// under the joint key of `contributions`.
///
/// The aggregated-session counterpart of [`crate::verify_payload`]: the
/// round-one roster stands in for the public key. A roster that does not
/// aggregate or a payload that does not encode is an error, not a `false`
/// verdict.
pub fn verify_payload_aggregated(
    contributions: &[[u8; 32]],
    payload: &TxPayload,
    sig: &[u8; 64],
) -> Result<bool, CryptoError> {
    let joint = aggregate_public_key(contributions)?;
    let bytes = payload.to_sign_bytes()?;
    Ok(verify(&joint, &bytes, sig))
}
