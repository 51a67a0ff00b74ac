use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::error::IdentifierError;
use crate::hash::{checksum, hash_chain, verify_checksum, CHECKSUM_LEN};

/// Wire length of an account address.
pub const ADDRESS_LEN: usize = 26;
/// Version byte at offset 0 of every account address.
pub const ADDRESS_VERSION: u8 = 5;

const PUBKEY_HASH_LEN: usize = 20;

/// Account address.
///
/// Layout: version(1) | chain tag(1) | hash_chain(public key)[..20] |
/// checksum(4). The checksum covers the 22-byte prefix, so any corruption
/// of version, tag or key hash is caught by validation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Derive the address owning `public_key` on `chain`.
    pub fn from_public_key(public_key: &[u8; 32], chain: ChainId) -> Address {
        let digest = hash_chain(public_key);
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = ADDRESS_VERSION;
        bytes[1] = chain.tag();
        bytes[2..2 + PUBKEY_HASH_LEN].copy_from_slice(&digest[..PUBKEY_HASH_LEN]);
        let check = checksum(&bytes[..ADDRESS_LEN - CHECKSUM_LEN]);
        bytes[ADDRESS_LEN - CHECKSUM_LEN..].copy_from_slice(&check);
        Address(bytes)
    }

    /// Validate and adopt a raw 26-byte address.
    pub fn from_bytes(bytes: &[u8]) -> Result<Address, IdentifierError> {
        if bytes.len() != ADDRESS_LEN {
            return Err(IdentifierError::WrongLength {
                expected: ADDRESS_LEN,
                got: bytes.len(),
            });
        }
        if bytes[0] != ADDRESS_VERSION {
            return Err(IdentifierError::UnknownVersion(bytes[0]));
        }
        ChainId::from_tag(bytes[1])?;
        verify_checksum(bytes)?;
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(bytes);
        Ok(Address(out))
    }

    pub fn from_base58(s: &str) -> Result<Address, IdentifierError> {
        let bytes = bs58::decode(s).into_vec()?;
        Address::from_bytes(&bytes)
    }

    /// Network this address belongs to.
    pub fn chain(&self) -> ChainId {
        // constructors only admit recognized tags
        ChainId::from_tag(self.0[1]).unwrap_or(ChainId::Mainnet)
    }

    pub fn bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.base58())
    }
}

impl FromStr for Address {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Address, IdentifierError> {
        Address::from_base58(s)
    }
}
