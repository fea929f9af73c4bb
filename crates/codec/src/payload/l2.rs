use crate::{
    decoding::reader::{read_u64, read_u8, read_word, read_word_destination, read_word_u64, take},
    error::DecodingError,
};

use alloy_primitives::{Bytes, TxKind, U256};

/// The kind of an L2 message, carried in the first byte of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum L2MessageKind {
    /// An unsigned transaction with an explicit nonce.
    UnsignedUserTx = 0,
    /// A contract transaction identified by its request id.
    ContractTx = 1,
    /// A call that does not mutate state.
    NonmutatingCall = 2,
    /// A batch of length prefixed L2 messages.
    Batch = 3,
    /// An EIP-2718 encoded signed transaction.
    SignedTx = 4,
    /// A heartbeat, carrying no transaction.
    Heartbeat = 6,
    /// A compressed signed transaction.
    SignedCompressedTx = 7,
}

impl L2MessageKind {
    /// Splits an L2 message into its kind and its body.
    pub fn split(mut buf: &[u8]) -> Result<(Self, &[u8]), DecodingError> {
        let kind = Self::try_from(read_u8(&mut buf, "l2 message kind")?)?;
        Ok((kind, buf))
    }
}

impl TryFrom<u8> for L2MessageKind {
    type Error = DecodingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::UnsignedUserTx,
            1 => Self::ContractTx,
            2 => Self::NonmutatingCall,
            3 => Self::Batch,
            4 => Self::SignedTx,
            6 => Self::Heartbeat,
            7 => Self::SignedCompressedTx,
            tag => return Err(DecodingError::UnknownL2MessageKind(tag)),
        })
    }
}

/// The body of an unsigned or contract L2 transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTxPayload {
    /// The gas limit.
    pub gas_limit: u64,
    /// The max fee per gas.
    pub max_fee_per_gas: U256,
    /// The nonce, only present for unsigned user transactions.
    pub nonce: Option<u64>,
    /// The destination.
    pub to: TxKind,
    /// The transferred value.
    pub value: U256,
    /// The call data.
    pub input: Bytes,
}

impl UnsignedTxPayload {
    /// Decodes the body of an [`L2MessageKind::UnsignedUserTx`].
    pub fn decode_unsigned(buf: &[u8]) -> Result<Self, DecodingError> {
        Self::decode(buf, true)
    }

    /// Decodes the body of an [`L2MessageKind::ContractTx`].
    pub fn decode_contract(buf: &[u8]) -> Result<Self, DecodingError> {
        Self::decode(buf, false)
    }

    fn decode(mut buf: &[u8], with_nonce: bool) -> Result<Self, DecodingError> {
        let buf = &mut buf;
        let gas_limit = read_word_u64(buf, "gas limit")?;
        let max_fee_per_gas = read_word(buf, "max fee per gas")?;
        let nonce = if with_nonce { Some(read_word_u64(buf, "nonce")?) } else { None };
        let to = read_word_destination(buf, "destination")?;
        let value = read_word(buf, "value")?;
        let input = Bytes::copy_from_slice(*buf);

        Ok(Self { gas_limit, max_fee_per_gas, nonce, to, value, input })
    }
}

/// An iterator over the entries of an [`L2MessageKind::Batch`]. Each entry is prefixed by its
/// length as a big-endian `u64`. A malformed frame yields a single error and ends the iteration.
#[derive(Debug, Clone)]
pub struct BatchEntries<'a> {
    buf: &'a [u8],
    max_entry_size: usize,
    done: bool,
}

impl<'a> BatchEntries<'a> {
    /// Returns a new [`BatchEntries`] over the batch body.
    pub const fn new(buf: &'a [u8], max_entry_size: usize) -> Self {
        Self { buf, max_entry_size, done: false }
    }

    fn next_entry(&mut self) -> Result<&'a [u8], DecodingError> {
        let len = read_u64(&mut self.buf, "batch entry length")?;
        if len > self.max_entry_size as u64 {
            return Err(DecodingError::malformed("batch entry length", "exceeds the maximum size"))
        }
        take(&mut self.buf, len as usize, "batch entry")
    }
}

impl<'a> Iterator for BatchEntries<'a> {
    type Item = Result<&'a [u8], DecodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.buf.is_empty() {
            return None
        }
        let entry = self.next_entry();
        self.done = entry.is_err();
        Some(entry)
    }
}
