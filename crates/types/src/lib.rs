//! Core value types of the Corvus client SDK: network parameters, the
//! checksummed identifier formats (addresses, contract ids, token ids),
//! the contract kind registry, and the protocol's fee and precision
//! constants.

mod address;
mod amount;
mod chain;
mod contract;
mod error;
mod fees;
mod hash;
mod token;

pub use address::{Address, ADDRESS_LEN, ADDRESS_VERSION};
pub use amount::to_token_units;
pub use chain::ChainId;
pub use contract::{
    ContractId, ContractKind, ContractMeta, ContractSupport, CONTRACT_ID_LEN, CONTRACT_ID_VERSION,
};
pub use error::{AmountError, ContractError, IdentifierError};
pub use fees::{
    CANCEL_LEASE_FEE, DB_PUT_FEE, EXECUTE_CONTRACT_FEE, FEE_SCALE, LEASE_FEE, PAYMENT_FEE,
    REGISTER_CONTRACT_FEE, UNITY,
};
pub use hash::{blake2b256, checksum, hash_chain, keccak256, CHECKSUM_LEN};
pub use token::{TokenId, TOKEN_ID_LEN, TOKEN_ID_VERSION};
