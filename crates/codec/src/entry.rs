use corvus_types::{Address, ContractId, TokenId, ADDRESS_LEN, CONTRACT_ID_LEN, TOKEN_ID_LEN};

use crate::error::CodecError;
use crate::wire::{
    read_32, read_u16_be, read_u32_be, read_u64_be, read_u8, take, write_short_bytes,
    write_u16_be, write_u32_be, write_u64_be, write_u8,
};

// Entry tags are assigned by the chain; 7 and 12 are reserved and must
// stay rejected until the chain defines them.
const TAG_PUBLIC_KEY: u8 = 1;
const TAG_ADDRESS: u8 = 2;
const TAG_AMOUNT: u8 = 3;
const TAG_INT32: u8 = 4;
const TAG_STR: u8 = 5;
const TAG_CONTRACT_ACCOUNT: u8 = 6;
const TAG_TOKEN_ID: u8 = 8;
const TAG_TIMESTAMP: u8 = 9;
const TAG_BOOL: u8 = 10;
const TAG_BYTES: u8 = 11;

/// One positional argument in a contract call.
///
/// Wire form is a 1-byte tag followed by the payload. Fixed-size payloads
/// carry no length; `Str` and `Bytes` carry a 2-byte big-endian *byte*
/// length. Identifier payloads are validated on decode, checksum included;
/// `Bool` decodes 0 and 1 only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataEntry {
    PublicKey([u8; 32]),
    Address(Address),
    /// Token or coin amount in minimal units.
    Amount(u64),
    Int32(u32),
    Str(String),
    /// A contract referred to as a stack argument.
    ContractAccount(ContractId),
    TokenId(TokenId),
    /// Nanoseconds since the epoch.
    Timestamp(u64),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl DataEntry {
    /// Chain-assigned wire tag.
    pub fn tag(&self) -> u8 {
        match self {
            DataEntry::PublicKey(_) => TAG_PUBLIC_KEY,
            DataEntry::Address(_) => TAG_ADDRESS,
            DataEntry::Amount(_) => TAG_AMOUNT,
            DataEntry::Int32(_) => TAG_INT32,
            DataEntry::Str(_) => TAG_STR,
            DataEntry::ContractAccount(_) => TAG_CONTRACT_ACCOUNT,
            DataEntry::TokenId(_) => TAG_TOKEN_ID,
            DataEntry::Timestamp(_) => TAG_TIMESTAMP,
            DataEntry::Bool(_) => TAG_BOOL,
            DataEntry::Bytes(_) => TAG_BYTES,
        }
    }

    pub fn serialize_into(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        write_u8(out, self.tag());
        match self {
            DataEntry::PublicKey(pk) => out.extend_from_slice(pk),
            DataEntry::Address(addr) => out.extend_from_slice(addr.bytes()),
            DataEntry::Amount(v) => write_u64_be(out, *v),
            DataEntry::Int32(v) => write_u32_be(out, *v),
            DataEntry::Str(s) => write_short_bytes(out, s.as_bytes())?,
            DataEntry::ContractAccount(id) => out.extend_from_slice(id.bytes()),
            DataEntry::TokenId(id) => out.extend_from_slice(id.bytes()),
            DataEntry::Timestamp(v) => write_u64_be(out, *v),
            DataEntry::Bool(v) => write_u8(out, *v as u8),
            DataEntry::Bytes(b) => write_short_bytes(out, b)?,
        }
        Ok(())
    }

    fn deserialize(input: &mut &[u8]) -> Result<DataEntry, CodecError> {
        let tag = read_u8(input)?;
        let entry = match tag {
            TAG_PUBLIC_KEY => DataEntry::PublicKey(read_32(input)?),
            TAG_ADDRESS => DataEntry::Address(Address::from_bytes(take(input, ADDRESS_LEN)?)?),
            TAG_AMOUNT => DataEntry::Amount(read_u64_be(input)?),
            TAG_INT32 => DataEntry::Int32(read_u32_be(input)?),
            TAG_STR => {
                let len = read_u16_be(input)? as usize;
                let bytes = take(input, len)?;
                let s = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidString)?;
                DataEntry::Str(s.to_string())
            }
            TAG_CONTRACT_ACCOUNT => {
                DataEntry::ContractAccount(ContractId::from_bytes(take(input, CONTRACT_ID_LEN)?)?)
            }
            TAG_TOKEN_ID => DataEntry::TokenId(TokenId::from_bytes(take(input, TOKEN_ID_LEN)?)?),
            TAG_TIMESTAMP => DataEntry::Timestamp(read_u64_be(input)?),
            TAG_BOOL => DataEntry::Bool(match read_u8(input)? {
                0 => false,
                1 => true,
                other => return Err(CodecError::InvalidBool(other)),
            }),
            TAG_BYTES => {
                let len = read_u16_be(input)? as usize;
                DataEntry::Bytes(take(input, len)?.to_vec())
            }
            other => return Err(CodecError::UnknownEntryTag(other)),
        };
        Ok(entry)
    }
}

/// Ordered contract call arguments.
///
/// Order is positional-argument order; the chain binds the n-th entry to
/// the n-th function parameter, so reordering changes the call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataStack(pub Vec<DataEntry>);

impl DataStack {
    pub fn new(entries: Vec<DataEntry>) -> DataStack {
        DataStack(entries)
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.0
    }

    /// Wire form: entry count (2 bytes BE) followed by each entry.
    pub fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        let count: u16 = self
            .0
            .len()
            .try_into()
            .map_err(|_| CodecError::LengthOverflow)?;
        let mut out = Vec::new();
        write_u16_be(&mut out, count);
        for entry in &self.0 {
            entry.serialize_into(&mut out)?;
        }
        Ok(out)
    }

    /// Decode a stack from the front of `bytes`.
    ///
    /// Returns the stack and the number of bytes consumed; stacks are
    /// embedded in larger structures, so trailing bytes belong to the
    /// caller.
    pub fn deserialize(bytes: &[u8]) -> Result<(DataStack, usize), CodecError> {
        let mut input = bytes;
        let count = read_u16_be(&mut input)? as usize;
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(DataEntry::deserialize(&mut input)?);
        }
        let consumed = bytes.len() - input.len();
        Ok((DataStack(entries), consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvus_types::ChainId;

    fn sample_contract_id() -> ContractId {
        let token = sample_token_id();
        token.contract_id()
    }

    fn sample_token_id() -> TokenId {
        // build one through the public surface: any valid contract id works
        let addr = Address::from_public_key(&[3u8; 32], ChainId::Mainnet);
        let mut bytes = [0u8; CONTRACT_ID_LEN];
        bytes.copy_from_slice(addr.bytes());
        bytes[0] = 6;
        let check = corvus_types::checksum(&bytes[..CONTRACT_ID_LEN - 4]);
        bytes[CONTRACT_ID_LEN - 4..].copy_from_slice(&check);
        let contract = ContractId::from_bytes(&bytes).unwrap();
        TokenId::from_contract_id(&contract, 2)
    }

    fn every_variant() -> DataStack {
        DataStack::new(vec![
            DataEntry::PublicKey([0x11; 32]),
            DataEntry::Address(Address::from_public_key(&[5u8; 32], ChainId::Testnet)),
            DataEntry::Amount(1_000_000_000),
            DataEntry::Int32(42),
            DataEntry::Str("héllo world".to_string()),
            DataEntry::ContractAccount(sample_contract_id()),
            DataEntry::TokenId(sample_token_id()),
            DataEntry::Timestamp(1_700_000_000_000_000_000),
            DataEntry::Bool(true),
            DataEntry::Bool(false),
            DataEntry::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]),
        ])
    }

    #[test]
    fn every_variant_round_trips() {
        let stack = every_variant();
        let bytes = stack.serialize().unwrap();
        let (decoded, consumed) = DataStack::deserialize(&bytes).unwrap();
        assert_eq!(decoded, stack);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn empty_stack_round_trips() {
        let empty = DataStack::default();
        let bytes = empty.serialize().unwrap();
        assert_eq!(bytes, vec![0, 0]);
        let (decoded, consumed) = DataStack::deserialize(&bytes).unwrap();
        assert_eq!(decoded, empty);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn trailing_bytes_are_left_to_the_caller() {
        let stack = DataStack::new(vec![DataEntry::Amount(7)]);
        let mut bytes = stack.serialize().unwrap();
        let inner_len = bytes.len();
        bytes.extend_from_slice(&[0xAA; 5]);
        let (decoded, consumed) = DataStack::deserialize(&bytes).unwrap();
        assert_eq!(decoded, stack);
        assert_eq!(consumed, inner_len);
    }

    #[test]
    fn reserved_tags_are_rejected() {
        for tag in [7u8, 12u8, 0u8, 200u8] {
            let mut bytes = vec![0, 1, tag];
            bytes.extend_from_slice(&[0u8; 64]);
            assert_eq!(
                DataStack::deserialize(&bytes).unwrap_err(),
                CodecError::UnknownEntryTag(tag)
            );
        }
    }

    #[test]
    fn truncated_input_is_rejected() {
        // count says one entry, Amount tag, but only two payload bytes
        let bytes = [0u8, 1, TAG_AMOUNT, 0, 0];
        assert_eq!(
            DataStack::deserialize(&bytes).unwrap_err(),
            CodecError::TruncatedInput
        );

        // count says two entries, input holds one
        let stack = DataStack::new(vec![DataEntry::Bool(true)]);
        let mut bytes = stack.serialize().unwrap();
        bytes[1] = 2;
        assert_eq!(
            DataStack::deserialize(&bytes).unwrap_err(),
            CodecError::TruncatedInput
        );
    }

    #[test]
    fn str_prefix_counts_bytes_not_chars() {
        let entry = DataEntry::Str("héllo".to_string());
        let mut out = Vec::new();
        entry.serialize_into(&mut out).unwrap();
        // tag, then a byte length of 6 for five characters
        assert_eq!(out[0], TAG_STR);
        assert_eq!(out[1..3], [0, 6]);
        assert_eq!(out.len(), 3 + 6);
    }

    #[test]
    fn corrupted_embedded_address_is_rejected() {
        let stack = DataStack::new(vec![DataEntry::Address(Address::from_public_key(
            &[8u8; 32],
            ChainId::Mainnet,
        ))]);
        let mut bytes = stack.serialize().unwrap();
        // damage one byte inside the address body
        bytes[10] ^= 0xFF;
        assert!(matches!(
            DataStack::deserialize(&bytes).unwrap_err(),
            CodecError::Identifier(_)
        ));
    }

    #[test]
    fn invalid_utf8_str_is_rejected() {
        let bytes = [0u8, 1, TAG_STR, 0, 2, 0xFF, 0xFE];
        assert_eq!(
            DataStack::deserialize(&bytes).unwrap_err(),
            CodecError::InvalidString
        );
    }

    #[test]
    fn bool_payloads_are_strictly_zero_or_one() {
        for (byte, value) in [(0u8, false), (1u8, true)] {
            let bytes = [0u8, 1, TAG_BOOL, byte];
            let (decoded, _) = DataStack::deserialize(&bytes).unwrap();
            assert_eq!(decoded, DataStack::new(vec![DataEntry::Bool(value)]));
        }
        for byte in [2u8, 0xFF] {
            let bytes = [0u8, 1, TAG_BOOL, byte];
            assert_eq!(
                DataStack::deserialize(&bytes).unwrap_err(),
                CodecError::InvalidBool(byte)
            );
        }
    }
}
