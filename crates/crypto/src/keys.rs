//! Account key pairs.

use num_bigint::BigUint;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use corvus_types::{hash_chain, Address, ChainId, IdentifierError};

use crate::field::le32;
use crate::point::basepoint;
use crate::sign::clamp;

/// Account key pair.
///
/// The secret is stored clamped, which is what every signer on this chain
/// does on use anyway; the public key is the 32-byte Montgomery-form key
/// the chain knows the account by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret: [u8; 32],
    public: [u8; 32],
}

impl KeyPair {
    /// Deterministic key pair from an account seed.
    ///
    /// The scalar is SHA-256 over the chain's composite hash of the seed
    /// bytes, then clamped.
    pub fn from_account_seed(seed: &[u8]) -> KeyPair {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&Sha256::digest(hash_chain(seed)));
        KeyPair::from_secret(secret)
    }

    /// Key pair from an existing 32-byte secret. Clamps on the way in.
    pub fn from_secret(mut secret: [u8; 32]) -> KeyPair {
        clamp(&mut secret);
        let a = BigUint::from_bytes_le(&secret);
        let public = le32(&basepoint().scalar_mul(&a).montgomery_u());
        KeyPair { secret, public }
    }

    /// Key pair from a Base58 secret key.
    pub fn from_secret_base58(s: &str) -> Result<KeyPair, IdentifierError> {
        let bytes = bs58::decode(s).into_vec()?;
        let secret: [u8; 32] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| IdentifierError::WrongLength {
                    expected: 32,
                    got: bytes.len(),
                })?;
        Ok(KeyPair::from_secret(secret))
    }

    /// Fresh key pair from the OS generator.
    pub fn generate() -> KeyPair {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        KeyPair::from_secret(secret)
    }

    /// Address of this key pair on `chain`.
    pub fn address(&self, chain: ChainId) -> Address {
        Address::from_public_key(&self.public, chain)
    }

    pub fn secret(&self) -> &[u8; 32] {
        &self.secret
    }

    pub fn public(&self) -> &[u8; 32] {
        &self.public
    }

    pub fn secret_base58(&self) -> String {
        bs58::encode(&self.secret).into_string()
    }

    pub fn public_base58(&self) -> String {
        bs58::encode(&self.public).into_string()
    }
}
