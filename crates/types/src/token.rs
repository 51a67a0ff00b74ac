use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::contract::ContractId;
use crate::error::IdentifierError;
use crate::hash::{checksum, verify_checksum, CHECKSUM_LEN};

/// Wire length of a token id.
pub const TOKEN_ID_LEN: usize = 30;
/// Version byte at offset 0 of every token id.
pub const TOKEN_ID_VERSION: u8 = 132;

const CONTRACT_BODY_LEN: usize = 21;

/// Token identifier.
///
/// Tokens are minted by contracts, and a token id embeds its issuing
/// contract: version(1) | contract id bytes 1..22 (21) | token index(4 BE)
/// | checksum(4). Dropping the index and re-deriving version and checksum
/// recovers the contract id exactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId([u8; TOKEN_ID_LEN]);

impl TokenId {
    /// Token id for the `index`-th token issued by `contract`.
    pub fn from_contract_id(contract: &ContractId, index: u32) -> TokenId {
        let c = contract.bytes();
        let mut bytes = [0u8; TOKEN_ID_LEN];
        bytes[0] = TOKEN_ID_VERSION;
        bytes[1..1 + CONTRACT_BODY_LEN].copy_from_slice(&c[1..1 + CONTRACT_BODY_LEN]);
        bytes[22..26].copy_from_slice(&index.to_be_bytes());
        let check = checksum(&bytes[..TOKEN_ID_LEN - CHECKSUM_LEN]);
        bytes[TOKEN_ID_LEN - CHECKSUM_LEN..].copy_from_slice(&check);
        TokenId(bytes)
    }

    /// Validate and adopt a raw 30-byte token id.
    pub fn from_bytes(bytes: &[u8]) -> Result<TokenId, IdentifierError> {
        if bytes.len() != TOKEN_ID_LEN {
            return Err(IdentifierError::WrongLength {
                expected: TOKEN_ID_LEN,
                got: bytes.len(),
            });
        }
        if bytes[0] != TOKEN_ID_VERSION {
            return Err(IdentifierError::UnknownVersion(bytes[0]));
        }
        ChainId::from_tag(bytes[1])?;
        verify_checksum(bytes)?;
        let mut out = [0u8; TOKEN_ID_LEN];
        out.copy_from_slice(bytes);
        Ok(TokenId(out))
    }

    pub fn from_base58(s: &str) -> Result<TokenId, IdentifierError> {
        let bytes = bs58::decode(s).into_vec()?;
        TokenId::from_bytes(&bytes)
    }

    /// Issuing contract, reconstructed from the embedded body.
    pub fn contract_id(&self) -> ContractId {
        let mut body = [0u8; CONTRACT_BODY_LEN];
        body.copy_from_slice(&self.0[1..1 + CONTRACT_BODY_LEN]);
        ContractId::from_token_body(&body)
    }

    /// Position of this token within its contract's issuance.
    pub fn index(&self) -> u32 {
        u32::from_be_bytes([self.0[22], self.0[23], self.0[24], self.0[25]])
    }

    /// Network this token lives on.
    pub fn chain(&self) -> ChainId {
        // constructors only admit recognized tags
        ChainId::from_tag(self.0[1]).unwrap_or(ChainId::Mainnet)
    }

    pub fn bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }

    pub fn base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base58())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.base58())
    }
}

impl FromStr for TokenId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<TokenId, IdentifierError> {
        TokenId::from_base58(s)
    }
}
