//! Decoding of the canonical message layout.

mod macros;

pub mod reader;

/// Tests utils.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use crate::error::DecodingError;
use reader::{read_address, read_length_prefixed_u256, read_optional_b256, read_u64, read_u8};

use alloy_primitives::{bytes::Buf, Bytes};
use rollup_inbox_primitives::{IncomingMessage, MessageHeader, MessageKind, ProtocolRevision};

/// The maximum size of the encoded fields preceding the payload: kind, poster, block number,
/// timestamp, request id, L1 base fee and L2 block hash.
pub const MAX_HEADER_SIZE: usize = 1 + 20 + 8 + 8 + 33 + 33 + 33;

/// Decodes a [`MessageHeader`] from the buffer, checking that its kind is active at the provided
/// revision.
pub fn decode_header(
    buf: &mut &[u8],
    revision: ProtocolRevision,
) -> Result<MessageHeader, DecodingError> {
    let kind = MessageKind::try_from(read_u8(buf, "kind")?)?;
    if !kind.is_active_at(revision) {
        return Err(DecodingError::KindNotActivated { kind, revision })
    }

    let poster = read_address(buf, "poster")?;
    let block_number = read_u64(buf, "block number")?;
    let timestamp = read_u64(buf, "timestamp")?;
    let request_id = read_optional_b256(buf, "request id")?;
    let l1_base_fee = read_length_prefixed_u256(buf, "l1 base fee")?;

    Ok(MessageHeader { kind, poster, block_number, timestamp, request_id, l1_base_fee })
}

/// Decodes an [`IncomingMessage`] from the buffer. The payload is all the bytes following the
/// L2 block hash and must not exceed `max_payload_size`.
pub fn decode_message(
    buf: &mut &[u8],
    revision: ProtocolRevision,
    max_payload_size: usize,
) -> Result<IncomingMessage, DecodingError> {
    let header = decode_header(buf, revision)?;
    let l2_block_hash = read_optional_b256(buf, "l2 block hash")?;

    let size = buf.len();
    if size > max_payload_size {
        return Err(DecodingError::OversizedPayload { size, max: max_payload_size })
    }
    let payload = Bytes::copy_from_slice(*buf);
    buf.advance(size);

    Ok(IncomingMessage { header, payload, batch_gas_cost: None, l2_block_hash })
}
