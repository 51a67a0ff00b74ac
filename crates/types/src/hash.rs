//! The chain's composite hash.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use sha3::Keccak256;

use crate::error::IdentifierError;

type Blake2b256 = Blake2b<U32>;

/// Trailing checksum length shared by every identifier format.
pub const CHECKSUM_LEN: usize = 4;

/// Blake2b with a 256-bit output.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2b256::digest(data));
    out
}

/// Keccak-256 with the original pre-NIST padding.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// Composite digest used for all identifier material: Keccak-256 over
/// Blake2b-256. The order is part of the wire contract.
pub fn hash_chain(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}

/// First four bytes of the composite digest.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = hash_chain(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Validate the trailing checksum of an identifier's byte form.
pub(crate) fn verify_checksum(bytes: &[u8]) -> Result<(), IdentifierError> {
    let split = bytes.len() - CHECKSUM_LEN;
    if bytes[split..] != checksum(&bytes[..split]) {
        return Err(IdentifierError::ChecksumMismatch);
    }
    Ok(())
}
