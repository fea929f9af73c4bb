//! Encoding of messages into the canonical layout.

use crate::{decoding::MAX_HEADER_SIZE, error::EncodingError};

use alloy_primitives::{bytes::BufMut, Bytes, B256};
use rollup_inbox_primitives::{IncomingMessage, MessageHeader};

/// Encodes the message into its canonical layout. Fails if the payload is larger than
/// `max_payload_size`.
pub fn encode_message(
    message: &IncomingMessage,
    max_payload_size: usize,
) -> Result<Bytes, EncodingError> {
    let size = message.payload.len();
    if size > max_payload_size {
        return Err(EncodingError::OversizedPayload { size, max: max_payload_size })
    }

    let mut out = Vec::with_capacity(MAX_HEADER_SIZE + size);
    encode_header(&message.header, &mut out);
    encode_optional_b256(message.l2_block_hash.as_ref(), &mut out);
    out.put_slice(&message.payload);

    Ok(out.into())
}

/// Encodes the header fields into the buffer.
pub fn encode_header<B: BufMut>(header: &MessageHeader, out: &mut B) {
    out.put_u8(header.kind.as_u8());
    out.put_slice(header.poster.as_slice());
    out.put_u64(header.block_number);
    out.put_u64(header.timestamp);
    encode_optional_b256(header.request_id.as_ref(), out);

    let l1_base_fee = header.l1_base_fee.to_be_bytes_trimmed_vec();
    out.put_u8(l1_base_fee.len() as u8);
    out.put_slice(&l1_base_fee);
}

fn encode_optional_b256<B: BufMut>(value: Option<&B256>, out: &mut B) {
    match value {
        Some(hash) => {
            out.put_u8(1);
            out.put_slice(hash.as_slice());
        }
        None => out.put_u8(0),
    }
}
