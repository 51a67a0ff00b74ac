use corvus_types::{Address, ContractId, ContractMeta, IdentifierError};

use crate::entry::DataStack;
use crate::error::CodecError;
use crate::wire::{write_short_bytes, write_u16_be, write_u64_be, write_u8};

// Transaction type bytes. Part of the wire contract with the chain.
pub const TX_TYPE_PAYMENT: u8 = 2;
pub const TX_TYPE_LEASE: u8 = 3;
pub const TX_TYPE_CANCEL_LEASE: u8 = 4;
pub const TX_TYPE_REGISTER_CONTRACT: u8 = 8;
pub const TX_TYPE_EXECUTE_CONTRACT: u8 = 9;
pub const TX_TYPE_DB_PUT: u8 = 10;

/// Subtype tag for db-put values; ByteArray is the only subtype the chain
/// defines today.
pub const DB_ENTRY_BYTE_ARRAY: u8 = 1;

/// Length prefix for attachment and description fields.
///
/// The chain counts Unicode scalar values here, not bytes, while the
/// payload that follows is raw UTF-8. A multi-byte character therefore
/// makes the prefix smaller than the span it covers; both sides must
/// agree on this or signatures break.
fn write_rune_counted(out: &mut Vec<u8>, s: &str) -> Result<(), CodecError> {
    let runes: u16 = s
        .chars()
        .count()
        .try_into()
        .map_err(|_| CodecError::LengthOverflow)?;
    write_u16_be(out, runes);
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

/// Transfer of chain coins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPayload {
    /// Nanoseconds since the epoch.
    pub timestamp: u64,
    pub amount: u64,
    pub fee: u64,
    pub fee_scale: u16,
    pub recipient: Address,
    pub attachment: String,
}

impl PaymentPayload {
    /// Canonical bytes the sender signs. Field order is the wire contract;
    /// reordering breaks signature validation chain-side.
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_u8(&mut out, TX_TYPE_PAYMENT);
        write_u64_be(&mut out, self.timestamp);
        write_u64_be(&mut out, self.amount);
        write_u64_be(&mut out, self.fee);
        write_u16_be(&mut out, self.fee_scale);
        out.extend_from_slice(self.recipient.bytes());
        write_rune_counted(&mut out, &self.attachment)?;
        Ok(out)
    }
}

/// Lease of stake to another account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeasePayload {
    pub recipient: Address,
    pub amount: u64,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
}

impl LeasePayload {
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_u8(&mut out, TX_TYPE_LEASE);
        out.extend_from_slice(self.recipient.bytes());
        write_u64_be(&mut out, self.amount);
        write_u64_be(&mut out, self.fee);
        write_u16_be(&mut out, self.fee_scale);
        write_u64_be(&mut out, self.timestamp);
        Ok(out)
    }
}

/// Cancellation of an outstanding lease, named by its transaction id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelLeasePayload {
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    /// Base58 id of the lease transaction being cancelled.
    pub lease_tx_id: String,
}

impl CancelLeasePayload {
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let id = bs58::decode(self.lease_tx_id.as_str())
            .into_vec()
            .map_err(IdentifierError::Base58)?;
        let mut out = Vec::new();
        write_u8(&mut out, TX_TYPE_CANCEL_LEASE);
        write_u64_be(&mut out, self.fee);
        write_u16_be(&mut out, self.fee_scale);
        write_u64_be(&mut out, self.timestamp);
        // the decoded id goes in verbatim, no length prefix
        out.extend_from_slice(&id);
        Ok(out)
    }
}

/// Registration of a compiled contract with its initialization arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterContractPayload {
    pub meta: ContractMeta,
    pub data: DataStack,
    pub description: String,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
}

impl RegisterContractPayload {
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_u8(&mut out, TX_TYPE_REGISTER_CONTRACT);
        write_short_bytes(&mut out, self.meta.bytes())?;
        let data = self.data.serialize()?;
        write_short_bytes(&mut out, &data)?;
        write_rune_counted(&mut out, &self.description)?;
        write_u64_be(&mut out, self.fee);
        write_u16_be(&mut out, self.fee_scale);
        write_u64_be(&mut out, self.timestamp);
        Ok(out)
    }
}

/// Call of a function on a registered contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteFunctionPayload {
    pub contract_id: ContractId,
    /// Position of the function in the contract's function table.
    pub function_index: u16,
    pub data: DataStack,
    pub attachment: String,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
}

impl ExecuteFunctionPayload {
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_u8(&mut out, TX_TYPE_EXECUTE_CONTRACT);
        out.extend_from_slice(self.contract_id.bytes());
        write_u16_be(&mut out, self.function_index);
        let data = self.data.serialize()?;
        write_short_bytes(&mut out, &data)?;
        write_rune_counted(&mut out, &self.attachment)?;
        write_u64_be(&mut out, self.fee);
        write_u16_be(&mut out, self.fee_scale);
        write_u64_be(&mut out, self.timestamp);
        Ok(out)
    }
}

/// Write of a key/value pair into the sender's account database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbPutPayload {
    pub key: String,
    pub value: Vec<u8>,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
}

impl DbPutPayload {
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        write_u8(&mut out, TX_TYPE_DB_PUT);
        write_short_bytes(&mut out, self.key.as_bytes())?;
        // the value length prefix covers the subtype tag as well
        let len: u16 = self
            .value
            .len()
            .checked_add(1)
            .and_then(|n| n.try_into().ok())
            .ok_or(CodecError::LengthOverflow)?;
        write_u16_be(&mut out, len);
        write_u8(&mut out, DB_ENTRY_BYTE_ARRAY);
        out.extend_from_slice(&self.value);
        write_u64_be(&mut out, self.fee);
        write_u16_be(&mut out, self.fee_scale);
        write_u64_be(&mut out, self.timestamp);
        Ok(out)
    }
}

/// Closed set of signable transaction payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxPayload {
    Payment(PaymentPayload),
    Lease(LeasePayload),
    CancelLease(CancelLeasePayload),
    RegisterContract(RegisterContractPayload),
    ExecuteFunction(ExecuteFunctionPayload),
    DbPut(DbPutPayload),
}

impl TxPayload {
    /// Type byte leading this payload's canonical bytes.
    pub fn tx_type(&self) -> u8 {
        match self {
            TxPayload::Payment(_) => TX_TYPE_PAYMENT,
            TxPayload::Lease(_) => TX_TYPE_LEASE,
            TxPayload::CancelLease(_) => TX_TYPE_CANCEL_LEASE,
            TxPayload::RegisterContract(_) => TX_TYPE_REGISTER_CONTRACT,
            TxPayload::ExecuteFunction(_) => TX_TYPE_EXECUTE_CONTRACT,
            TxPayload::DbPut(_) => TX_TYPE_DB_PUT,
        }
    }

    /// Canonical bytes the sender signs.
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            TxPayload::Payment(p) => p.to_sign_bytes(),
            TxPayload::Lease(p) => p.to_sign_bytes(),
            TxPayload::CancelLease(p) => p.to_sign_bytes(),
            TxPayload::RegisterContract(p) => p.to_sign_bytes(),
            TxPayload::ExecuteFunction(p) => p.to_sign_bytes(),
            TxPayload::DbPut(p) => p.to_sign_bytes(),
        }
    }
}
