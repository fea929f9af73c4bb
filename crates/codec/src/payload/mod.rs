//! Decoders for the kind specific message payloads.

pub use deposit::EthDepositPayload;
mod deposit;

pub use init::InitPayload;
mod init;

pub use l2::{BatchEntries, L2MessageKind, UnsignedTxPayload};
mod l2;

pub use report::BatchPostingReportPayload;
mod report;

pub use retryable::RetryablePayload;
mod retryable;
