//! Wire codecs of the Corvus client SDK: the tagged data-entry protocol
//! carrying contract call arguments, and the canonical signing payload of
//! each transaction type.

mod entry;
mod error;
mod tx;
mod wire;

pub use entry::{DataEntry, DataStack};
pub use error::CodecError;
pub use tx::{
    CancelLeasePayload, DbPutPayload, ExecuteFunctionPayload, LeasePayload, PaymentPayload,
    RegisterContractPayload, TxPayload, DB_ENTRY_BYTE_ARRAY, TX_TYPE_CANCEL_LEASE,
    TX_TYPE_DB_PUT, TX_TYPE_EXECUTE_CONTRACT, TX_TYPE_LEASE, TX_TYPE_PAYMENT,
    TX_TYPE_REGISTER_CONTRACT,
};
