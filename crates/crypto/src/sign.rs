//! Single-party signatures in the chain's Curve25519 scheme.
//!
//! Public keys are 32-byte Montgomery-form keys; signatures are 64 bytes,
//! R followed by the little-endian scalar s, with the public key's sign
//! bit folded into the top bit of s. Verifiers reconstruct the Edwards
//! key from the Montgomery key plus that bit.

use num_bigint::BigUint;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha512};

use corvus_codec::TxPayload;

use crate::error::CryptoError;
use crate::field::{le32, Q};
use crate::keys::KeyPair;
use crate::point::{basepoint, EdwardsPoint};

/// Domain prefix of the deterministic nonce hash. Fixed by the chain;
/// changing it breaks interoperability with every deployed signer.
pub(crate) const NONCE_DOMAIN: [u8; 32] = [
    0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff,
];

/// Standard Curve25519 scalar clamp, applied to secrets on use.
pub(crate) fn clamp(secret: &mut [u8; 32]) {
    secret[0] &= 248;
    secret[31] &= 127;
    secret[31] |= 64;
}

/// SHA-512 over the concatenated parts, folded into the group order.
pub(crate) fn hash_to_scalar(parts: &[&[u8]]) -> BigUint {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    BigUint::from_bytes_le(&hasher.finalize()) % &*Q
}

/// Sign `msg` with a 32-byte secret and 64 bytes of signing randomness.
///
/// Deterministic in all three inputs. The randomness must come from a
/// CSPRNG and must not repeat across different messages under one key;
/// reuse leaks the key and nothing here can detect it.
pub fn sign(secret: &[u8; 32], msg: &[u8], rand: &[u8; 64]) -> [u8; 64] {
    let mut sk = *secret;
    clamp(&mut sk);
    let a = BigUint::from_bytes_le(&sk);
    let a_packed = basepoint().scalar_mul(&a).compress();
    let sign_bit = a_packed[31] & 0x80;

    let r = hash_to_scalar(&[&NONCE_DOMAIN, &sk, msg, rand]);
    let r_packed = basepoint().scalar_mul(&r).compress();

    let h = hash_to_scalar(&[&r_packed, &a_packed, msg]);
    let s = (r + h * a) % &*Q;

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&r_packed);
    sig[32..].copy_from_slice(&le32(&s));
    sig[63] |= sign_bit;
    sig
}

/// [`sign`] with fresh OS randomness.
pub fn sign_with_os_rng(secret: &[u8; 32], msg: &[u8]) -> [u8; 64] {
    let mut rand = [0u8; 64];
    OsRng.fill_bytes(&mut rand);
    sign(secret, msg, &rand)
}

/// Verify a 64-byte signature under a Montgomery-form public key.
/// Malformed inputs verify false rather than erroring; a verifier has no
/// one to report a parse failure to.
pub fn verify(public: &[u8; 32], msg: &[u8], sig: &[u8; 64]) -> bool {
    let sign_bit = sig[63] & 0x80 != 0;
    let a = match EdwardsPoint::from_montgomery(public, sign_bit) {
        Ok(point) => point,
        Err(_) => return false,
    };
    let a_packed = a.compress();

    let h = hash_to_scalar(&[&sig[..32], &a_packed, msg]);

    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&sig[32..]);
    s_bytes[31] &= 0x7f;
    let s = BigUint::from_bytes_le(&s_bytes);

    let check = basepoint()
        .scalar_mul(&s)
        .add(&a.negate().scalar_mul(&h))
        .compress();
    check[..] == sig[..32]
}

/// Sign a transaction payload over its canonical signing bytes.
pub fn sign_payload(keypair: &KeyPair, payload: &TxPayload) -> Result<[u8; 64], CryptoError> {
    let bytes = payload.to_sign_bytes()?;
    Ok(sign_with_os_rng(keypair.secret(), &bytes))
}

/// Verify a payload signature over the same canonical bytes.
pub fn verify_payload(
    public: &[u8; 32],
    payload: &TxPayload,
    sig: &[u8; 64],
) -> Result<bool, CryptoError> {
    let bytes = payload.to_sign_bytes()?;
    Ok(verify(public, &bytes, sig))
}
