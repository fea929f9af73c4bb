use rollup_inbox_primitives::{MessageKind, ProtocolRevision, UnknownMessageKind};

/// A boxed error returned by collaborators of the codec.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error occurring during the codec process.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// An error occurring at the decoding stage.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    /// An error occurring at the encoding stage.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// An error occurring during the decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodingError {
    /// The input ended before a field could be read.
    #[error("truncated input reading {field}: expected {expected} bytes, got {remaining}")]
    TruncatedInput {
        /// The field being read.
        field: &'static str,
        /// The count of bytes the field requires.
        expected: usize,
        /// The count of bytes left in the input.
        remaining: usize,
    },
    /// A field holds a value that is not allowed by the format.
    #[error("malformed {field}: {reason}")]
    MalformedField {
        /// The field being read.
        field: &'static str,
        /// Why the field is malformed.
        reason: &'static str,
    },
    /// The message kind tag is unknown.
    #[error(transparent)]
    UnknownMessageKind(#[from] UnknownMessageKind),
    /// The message kind is known but not active at the chain's protocol revision.
    #[error("message kind {kind} is not active at protocol revision {revision}")]
    KindNotActivated {
        /// The kind of the message.
        kind: MessageKind,
        /// The active revision.
        revision: ProtocolRevision,
    },
    /// The L2 message kind tag is unknown.
    #[error("unknown l2 message kind {0}")]
    UnknownL2MessageKind(u8),
    /// The payload exceeds the maximum size.
    #[error("payload of {size} bytes exceeds the maximum of {max} bytes")]
    OversizedPayload {
        /// The payload size.
        size: usize,
        /// The maximum payload size.
        max: usize,
    },
    /// The batch referred to by a batch posting report could not be fetched.
    #[error("failed to fetch batch {batch_number}: {source}")]
    BatchFetch {
        /// The batch number.
        batch_number: u64,
        /// The fetcher error.
        source: BoxError,
    },
    /// An error reading the input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DecodingError {
    /// Returns a [`DecodingError::TruncatedInput`] error.
    pub const fn truncated(field: &'static str, expected: usize, remaining: usize) -> Self {
        Self::TruncatedInput { field, expected, remaining }
    }

    /// Returns a [`DecodingError::MalformedField`] error.
    pub const fn malformed(field: &'static str, reason: &'static str) -> Self {
        Self::MalformedField { field, reason }
    }

    /// Returns true if the error means the node runs a protocol revision that does not support
    /// the message, as opposed to the message being malformed.
    pub const fn requires_protocol_upgrade(&self) -> bool {
        matches!(self, Self::KindNotActivated { .. })
    }
}

/// An error occurring during the encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The payload exceeds the maximum size.
    #[error("payload of {size} bytes exceeds the maximum of {max} bytes")]
    OversizedPayload {
        /// The payload size.
        size: usize,
        /// The maximum payload size.
        max: usize,
    },
}
