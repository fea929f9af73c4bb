use crate::{MessageHeader, MessageKind};

use alloy_primitives::{Bytes, B256};

/// A message sequenced on L1 and delivered to the L2 state transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// The message metadata.
    pub header: MessageHeader,
    /// The kind specific body of the message.
    pub payload: Bytes,
    /// The gas cost of the data of the batch the message reports on, if already known. It does
    /// not include the extra gas of the report. This is a derived hint and is not part of the
    /// wire format.
    pub batch_gas_cost: Option<u64>,
    /// The L2 block hash the message is expected to produce, used by callers to cross check a
    /// replay.
    pub l2_block_hash: Option<B256>,
}

impl IncomingMessage {
    /// Returns a new [`IncomingMessage`] with no batch gas cost and no L2 block hash.
    pub const fn new(header: MessageHeader, payload: Bytes) -> Self {
        Self { header, payload, batch_gas_cost: None, l2_block_hash: None }
    }

    /// Sets the L2 block hash.
    pub fn with_l2_block_hash(mut self, hash: B256) -> Self {
        self.l2_block_hash = Some(hash);
        self
    }

    /// Sets the batch gas cost.
    pub fn with_batch_gas_cost(mut self, cost: u64) -> Self {
        self.batch_gas_cost = Some(cost);
        self
    }

    /// Returns the kind of the message.
    pub const fn kind(&self) -> MessageKind {
        self.header.kind
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for IncomingMessage {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let header = u.arbitrary()?;
        let len = u.int_in_range(0..=256)?;
        let payload = Bytes::copy_from_slice(u.bytes(len)?);
        Ok(Self { header, payload, batch_gas_cost: None, l2_block_hash: u.arbitrary()? })
    }
}
