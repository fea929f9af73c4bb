//! Primitive types for the rollup inbox.

pub use gas::{batch_data_gas, reported_batch_gas, BatchDataStats};
pub mod gas;

pub use header::MessageHeader;
mod header;

pub use kind::{MessageKind, ProtocolRevision, UnknownMessageKind};
mod kind;

pub use message::IncomingMessage;
mod message;

pub use transaction::{
    derive_request_id, Transaction, TxContract, TxDeposit, TxInternal, TxSubmitRetryable,
    TxUnsigned,
};
pub mod transaction;
