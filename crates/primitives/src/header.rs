use crate::MessageKind;

use alloy_primitives::{Address, B256, U256};

/// The metadata attached to every incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// The kind of the message, which decides how the payload is interpreted.
    pub kind: MessageKind,
    /// The account that originated and paid for the message on L1.
    pub poster: Address,
    /// The L1 block number at which the message was created.
    pub block_number: u64,
    /// The L1 block timestamp in seconds.
    pub timestamp: u64,
    /// The identifier correlating the message to its L1 origin.
    pub request_id: Option<B256>,
    /// The L1 base fee at the time the message was created.
    pub l1_base_fee: U256,
}

impl MessageHeader {
    /// Returns a new [`MessageHeader`] of the provided kind and poster. All other fields are zero
    /// and the request id is absent.
    pub const fn new(kind: MessageKind, poster: Address) -> Self {
        Self {
            kind,
            poster,
            block_number: 0,
            timestamp: 0,
            request_id: None,
            l1_base_fee: U256::ZERO,
        }
    }

    /// Sets the L1 block number.
    pub const fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = block_number;
        self
    }

    /// Sets the L1 timestamp.
    pub const fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the request id.
    pub const fn with_request_id(mut self, request_id: B256) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Sets the L1 base fee.
    pub const fn with_l1_base_fee(mut self, l1_base_fee: U256) -> Self {
        self.l1_base_fee = l1_base_fee;
        self
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for MessageHeader {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(Self {
            kind: u.arbitrary()?,
            poster: u.arbitrary()?,
            block_number: u.arbitrary()?,
            timestamp: u.arbitrary()?,
            request_id: u.arbitrary()?,
            l1_base_fee: u.arbitrary()?,
        })
    }
}
