use alloy_eips::eip2718::Eip2718Error;
use alloy_primitives::ChainId;
use rollup_inbox_codec::{payload::L2MessageKind, DecodingError};
use rollup_inbox_primitives::{MessageKind, ProtocolRevision};

/// An error occurred during the expansion of a message. A failed message yields no
/// transaction.
#[derive(Debug, thiserror::Error)]
pub enum ExpansionError {
    /// The message kind never expands into transactions.
    #[error("unsupported message kind {0}")]
    UnsupportedMessageKind(MessageKind),
    /// The message kind requires a request id and the message has none.
    #[error("missing request id for message kind {0}")]
    MissingRequestId(MessageKind),
    /// The payload of a single transaction message is malformed.
    #[error("malformed {kind} payload: {source}")]
    MalformedPayload {
        /// The kind of the message.
        kind: MessageKind,
        /// The decoding error.
        #[source]
        source: DecodingError,
    },
    /// The message kind is known but not active at the configured protocol revision.
    #[error("message kind {kind} is not active at protocol revision {revision}")]
    KindNotActivated {
        /// The kind of the message.
        kind: MessageKind,
        /// The configured protocol revision.
        revision: ProtocolRevision,
    },
}

impl ExpansionError {
    /// Returns true if the message requires a newer protocol revision to be expanded.
    pub const fn requires_protocol_upgrade(&self) -> bool {
        matches!(self, Self::KindNotActivated { .. })
    }
}

/// The reason an entry of an L2 message was skipped.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// The entry could not be decoded.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    /// The signed transaction could not be decoded.
    #[error("invalid signed transaction: {0}")]
    SignedTransaction(#[from] Eip2718Error),
    /// Blob transactions cannot be sent through the inbox.
    #[error("blob transactions are not supported")]
    BlobTransaction,
    /// The signed transaction is not bound to a chain.
    #[error("signed transaction is not replay protected")]
    UnprotectedTransaction,
    /// The signed transaction is bound to another chain.
    #[error("chain id mismatch: expected {expected}, got {got}")]
    ChainIdMismatch {
        /// The chain id of the expander.
        expected: ChainId,
        /// The chain id of the transaction.
        got: ChainId,
    },
    /// The L2 message kind is not supported.
    #[error("unsupported l2 message kind {0:?}")]
    UnsupportedL2MessageKind(L2MessageKind),
    /// Batches are nested deeper than allowed.
    #[error("batch nesting exceeds the maximum depth of {0}")]
    MaxDepthExceeded(usize),
    /// A contract transaction was found without a request id.
    #[error("missing request id for contract transaction")]
    MissingRequestId,
}
