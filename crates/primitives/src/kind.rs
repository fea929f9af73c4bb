//! The closed set of inbox message kinds and the protocol revisions that activate them.

use core::fmt;

/// A protocol revision of the chain. Message kinds are activated at a given revision and a
/// message of a kind that is not yet active must not be accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolRevision(pub u64);

impl ProtocolRevision {
    /// The revision the chain starts at.
    pub const GENESIS: Self = Self(0);
    /// The revision that introduced batch posting reports.
    pub const BATCH_POSTING_REPORT: Self = Self(1);
    /// The latest revision known to this implementation.
    pub const LATEST: Self = Self::BATCH_POSTING_REPORT;
}

impl From<u64> for ProtocolRevision {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProtocolRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of an incoming message. The numeric tags are part of the wire format and must never
/// change; new kinds are appended with a fresh tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageKind {
    /// A message carrying one or more L2 transactions.
    L2Message = 3,
    /// Marks the end of an L2 block.
    EndOfBlock = 6,
    /// An L2 transaction whose value is funded by an L1 deposit.
    L2FundedByL1 = 7,
    /// A rollup protocol event, ignored by the derivation.
    RollupEvent = 8,
    /// The submission of a retryable ticket.
    SubmitRetryable = 9,
    /// A batch used for gas estimation only.
    BatchForGasEstimation = 10,
    /// The chain initialization message.
    Initialize = 11,
    /// A deposit of ETH from L1.
    EthDeposit = 12,
    /// A report of a batch posted to L1, used to attribute its cost.
    BatchPostingReport = 13,
    /// An intentionally invalid message.
    Invalid = 0xFF,
}

impl MessageKind {
    /// All the known message kinds, ordered by tag.
    pub const ALL: [Self; 10] = [
        Self::L2Message,
        Self::EndOfBlock,
        Self::L2FundedByL1,
        Self::RollupEvent,
        Self::SubmitRetryable,
        Self::BatchForGasEstimation,
        Self::Initialize,
        Self::EthDeposit,
        Self::BatchPostingReport,
        Self::Invalid,
    ];

    /// Returns the wire tag of the kind.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the protocol revision at which the kind was activated.
    pub const fn activation(self) -> ProtocolRevision {
        match self {
            Self::BatchPostingReport => ProtocolRevision::BATCH_POSTING_REPORT,
            Self::L2Message |
            Self::EndOfBlock |
            Self::L2FundedByL1 |
            Self::RollupEvent |
            Self::SubmitRetryable |
            Self::BatchForGasEstimation |
            Self::Initialize |
            Self::EthDeposit |
            Self::Invalid => ProtocolRevision::GENESIS,
        }
    }

    /// Returns true if the kind is active at the provided revision.
    pub const fn is_active_at(self, revision: ProtocolRevision) -> bool {
        self.activation().0 <= revision.0
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = UnknownMessageKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            3 => Self::L2Message,
            6 => Self::EndOfBlock,
            7 => Self::L2FundedByL1,
            8 => Self::RollupEvent,
            9 => Self::SubmitRetryable,
            10 => Self::BatchForGasEstimation,
            11 => Self::Initialize,
            12 => Self::EthDeposit,
            13 => Self::BatchPostingReport,
            0xFF => Self::Invalid,
            tag => return Err(UnknownMessageKind(tag)),
        })
    }
}

impl From<MessageKind> for u8 {
    fn from(value: MessageKind) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::L2Message => "L2Message",
            Self::EndOfBlock => "EndOfBlock",
            Self::L2FundedByL1 => "L2FundedByL1",
            Self::RollupEvent => "RollupEvent",
            Self::SubmitRetryable => "SubmitRetryable",
            Self::BatchForGasEstimation => "BatchForGasEstimation",
            Self::Initialize => "Initialize",
            Self::EthDeposit => "EthDeposit",
            Self::BatchPostingReport => "BatchPostingReport",
            Self::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}

/// The tag does not map to any [`MessageKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown message kind {0}")]
pub struct UnknownMessageKind(pub u8);

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for MessageKind {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        u.choose(&Self::ALL).copied()
    }
}
