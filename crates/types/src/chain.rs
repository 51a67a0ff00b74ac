use crate::error::IdentifierError;

/// Network selector.
///
/// The tag byte sits at offset 1 of every address and contract id, so the
/// two networks can never parse each other's identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
    Mainnet,
    Testnet,
}

impl ChainId {
    /// Tag byte embedded in identifiers.
    pub fn tag(self) -> u8 {
        match self {
            ChainId::Mainnet => b'M',
            ChainId::Testnet => b'T',
        }
    }

    pub fn from_tag(tag: u8) -> Result<ChainId, IdentifierError> {
        match tag {
            b'M' => Ok(ChainId::Mainnet),
            b'T' => Ok(ChainId::Testnet),
            other => Err(IdentifierError::UnknownChainTag(other)),
        }
    }
}
