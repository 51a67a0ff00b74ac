use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::error::{ContractError, IdentifierError};
use crate::hash::{checksum, verify_checksum, CHECKSUM_LEN};

/// Wire length of a contract id.
pub const CONTRACT_ID_LEN: usize = 26;
/// Version byte at offset 0 of every contract id.
pub const CONTRACT_ID_VERSION: u8 = 6;

/// Contract identifier, assigned by the chain at registration.
///
/// Same layout as an account address but with its own version byte:
/// version(1) | chain tag(1) | body(20) | checksum(4).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractId([u8; CONTRACT_ID_LEN]);

impl ContractId {
    /// Validate and adopt a raw 26-byte contract id.
    pub fn from_bytes(bytes: &[u8]) -> Result<ContractId, IdentifierError> {
        if bytes.len() != CONTRACT_ID_LEN {
            return Err(IdentifierError::WrongLength {
                expected: CONTRACT_ID_LEN,
                got: bytes.len(),
            });
        }
        if bytes[0] != CONTRACT_ID_VERSION {
            return Err(IdentifierError::UnknownVersion(bytes[0]));
        }
        ChainId::from_tag(bytes[1])?;
        verify_checksum(bytes)?;
        let mut out = [0u8; CONTRACT_ID_LEN];
        out.copy_from_slice(bytes);
        Ok(ContractId(out))
    }

    pub fn from_base58(s: &str) -> Result<ContractId, IdentifierError> {
        let bytes = bs58::decode(s).into_vec()?;
        ContractId::from_bytes(&bytes)
    }

    /// Rebuild a contract id from the 21-byte body a token id embeds
    /// (chain tag plus the 20 body bytes; version and checksum are
    /// recomputed).
    pub(crate) fn from_token_body(body: &[u8; 21]) -> ContractId {
        let mut bytes = [0u8; CONTRACT_ID_LEN];
        bytes[0] = CONTRACT_ID_VERSION;
        bytes[1..1 + body.len()].copy_from_slice(body);
        let check = checksum(&bytes[..CONTRACT_ID_LEN - CHECKSUM_LEN]);
        bytes[CONTRACT_ID_LEN - CHECKSUM_LEN..].copy_from_slice(&check);
        ContractId(bytes)
    }

    /// Network this contract lives on.
    pub fn chain(&self) -> ChainId {
        // constructors only admit recognized tags
        ChainId::from_tag(self.0[1]).unwrap_or(ChainId::Mainnet)
    }

    pub fn bytes(&self) -> &[u8; CONTRACT_ID_LEN] {
        &self.0
    }

    pub fn base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base58())
    }
}

impl fmt::Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractId({})", self.base58())
    }
}

impl FromStr for ContractId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<ContractId, IdentifierError> {
        ContractId::from_base58(s)
    }
}

/// Contract families the chain names in its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Token,
    TokenWithSplit,
    NonFungible,
    PaymentChannel,
    Lock,
    System,
}

impl ContractKind {
    /// Resolve the kind string a node reports for a registered contract.
    ///
    /// Known kinds come back wrapped in their support level; strings the
    /// chain never issued are an error of their own.
    pub fn resolve(name: &str) -> Result<ContractSupport, ContractError> {
        let kind = match name {
            "TokenContract" => ContractKind::Token,
            "TokenContractWithSplit" => ContractKind::TokenWithSplit,
            "NonFungibleContract" => ContractKind::NonFungible,
            "PaymentChannelContract" => ContractKind::PaymentChannel,
            "LockContract" => ContractKind::Lock,
            "SystemContract" => ContractKind::System,
            other => return Err(ContractError::UnknownKind(other.to_string())),
        };
        Ok(kind.support())
    }

    /// Kind string as the chain spells it.
    pub fn chain_name(self) -> &'static str {
        match self {
            ContractKind::Token => "TokenContract",
            ContractKind::TokenWithSplit => "TokenContractWithSplit",
            ContractKind::NonFungible => "NonFungibleContract",
            ContractKind::PaymentChannel => "PaymentChannelContract",
            ContractKind::Lock => "LockContract",
            ContractKind::System => "SystemContract",
        }
    }

    fn support(self) -> ContractSupport {
        match self {
            ContractKind::Token | ContractKind::TokenWithSplit | ContractKind::System => {
                ContractSupport::Implemented(self)
            }
            ContractKind::NonFungible | ContractKind::PaymentChannel | ContractKind::Lock => {
                ContractSupport::Unsupported(self)
            }
        }
    }
}

/// Whether this client can drive a contract of a given kind.
///
/// Recognizing a kind and supporting it are different things; an
/// unsupported kind still parses so callers can report it precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractSupport {
    Implemented(ContractKind),
    Unsupported(ContractKind),
}

impl ContractSupport {
    pub fn kind(&self) -> ContractKind {
        match self {
            ContractSupport::Implemented(kind) | ContractSupport::Unsupported(kind) => *kind,
        }
    }

    /// Token-issuing kinds hand out token interfaces; everything else is
    /// refused here instead of failing deeper in a call chain.
    pub fn token_kind(&self) -> Result<ContractKind, ContractError> {
        match self {
            ContractSupport::Implemented(kind) => Ok(*kind),
            ContractSupport::Unsupported(kind) => Err(ContractError::Unsupported(*kind)),
        }
    }
}

/// Compiled contract payload for registration. Opaque to the client;
/// circulates as Base58 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractMeta(Vec<u8>);

impl ContractMeta {
    pub fn new(bytes: Vec<u8>) -> ContractMeta {
        ContractMeta(bytes)
    }

    pub fn from_base58(s: &str) -> Result<ContractMeta, IdentifierError> {
        Ok(ContractMeta(bs58::decode(s).into_vec()?))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contract_id() -> ContractId {
        let mut body = [0u8; 21];
        body[0] = b'T';
        for (i, b) in body[1..].iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        ContractId::from_token_body(&body)
    }

    #[test]
    fn contract_id_round_trips() {
        let id = sample_contract_id();
        assert_eq!(id.bytes()[0], CONTRACT_ID_VERSION);
        assert_eq!(id.chain(), ChainId::Testnet);
        assert_eq!(ContractId::from_base58(&id.base58()).unwrap(), id);
        assert_eq!(ContractId::from_bytes(id.bytes()).unwrap(), id);
    }

    #[test]
    fn any_flipped_byte_fails_validation() {
        let id = sample_contract_id();
        for i in 0..CONTRACT_ID_LEN {
            let mut bytes = *id.bytes();
            bytes[i] ^= 0x01;
            assert!(ContractId::from_bytes(&bytes).is_err(), "byte {i} accepted");
        }
    }

    #[test]
    fn address_version_is_not_a_contract_id() {
        let id = sample_contract_id();
        let mut bytes = *id.bytes();
        bytes[0] = 5;
        let split = CONTRACT_ID_LEN - CHECKSUM_LEN;
        let check = checksum(&bytes[..split]);
        bytes[split..].copy_from_slice(&check);
        assert_eq!(
            ContractId::from_bytes(&bytes),
            Err(IdentifierError::UnknownVersion(5))
        );
    }

    #[test]
    fn kind_resolution_splits_by_support() {
        let token = ContractKind::resolve("TokenContract").unwrap();
        assert_eq!(token, ContractSupport::Implemented(ContractKind::Token));
        assert_eq!(token.token_kind(), Ok(ContractKind::Token));

        let channel = ContractKind::resolve("PaymentChannelContract").unwrap();
        assert_eq!(
            channel,
            ContractSupport::Unsupported(ContractKind::PaymentChannel)
        );
        assert_eq!(
            channel.token_kind(),
            Err(ContractError::Unsupported(ContractKind::PaymentChannel))
        );
    }

    #[test]
    fn unknown_kind_string_is_its_own_error() {
        assert_eq!(
            ContractKind::resolve("VotingContract"),
            Err(ContractError::UnknownKind("VotingContract".to_string()))
        );
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in [
            ContractKind::Token,
            ContractKind::TokenWithSplit,
            ContractKind::NonFungible,
            ContractKind::PaymentChannel,
            ContractKind::Lock,
            ContractKind::System,
        ] {
            assert_eq!(ContractKind::resolve(kind.chain_name()).unwrap().kind(), kind);
        }
    }

    #[test]
    fn meta_base58_round_trips() {
        let meta = ContractMeta::new(vec![1, 2, 3, 250]);
        assert_eq!(ContractMeta::from_base58(&meta.base58()).unwrap(), meta);
    }
}
