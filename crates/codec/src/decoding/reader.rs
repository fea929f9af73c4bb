//! Field readers over a byte buffer. Every reader checks the remaining length before consuming
//! the bytes of a field.

use crate::{error::DecodingError, try_from_be_bytes_and_advance_buf};

use alloy_primitives::{bytes::Buf, Address, TxKind, B256, U256};

/// The size of a big-endian encoded word.
pub const WORD_SIZE: usize = 32;

/// The size of an address.
pub const ADDRESS_SIZE: usize = 20;

/// Takes `len` bytes from the buffer.
pub fn take<'a>(
    buf: &mut &'a [u8],
    len: usize,
    field: &'static str,
) -> Result<&'a [u8], DecodingError> {
    if buf.len() < len {
        return Err(DecodingError::truncated(field, len, buf.len()))
    }
    let (head, tail) = buf.split_at(len);
    *buf = tail;
    Ok(head)
}

/// Reads a single byte.
pub fn read_u8(buf: &mut &[u8], field: &'static str) -> Result<u8, DecodingError> {
    if !buf.has_remaining() {
        return Err(DecodingError::truncated(field, 1, 0))
    }
    Ok(buf.get_u8())
}

/// Reads a big-endian `u64`.
pub fn read_u64(buf: &mut &[u8], field: &'static str) -> Result<u64, DecodingError> {
    let remaining = buf.len();
    try_from_be_bytes_and_advance_buf!(u64, buf)
        .ok_or(DecodingError::truncated(field, std::mem::size_of::<u64>(), remaining))
}

/// Reads a 20 bytes address.
pub fn read_address(buf: &mut &[u8], field: &'static str) -> Result<Address, DecodingError> {
    take(buf, ADDRESS_SIZE, field).map(Address::from_slice)
}

/// Reads a 32 bytes hash.
pub fn read_b256(buf: &mut &[u8], field: &'static str) -> Result<B256, DecodingError> {
    take(buf, WORD_SIZE, field).map(B256::from_slice)
}

/// Reads a presence flag followed by a 32 bytes hash if the flag is set.
pub fn read_optional_b256(
    buf: &mut &[u8],
    field: &'static str,
) -> Result<Option<B256>, DecodingError> {
    match read_u8(buf, field)? {
        0 => Ok(None),
        1 => read_b256(buf, field).map(Some),
        _ => Err(DecodingError::malformed(field, "presence flag must be 0 or 1")),
    }
}

/// Reads a big-endian 32 bytes word.
pub fn read_word(buf: &mut &[u8], field: &'static str) -> Result<U256, DecodingError> {
    take(buf, WORD_SIZE, field).map(U256::from_be_slice)
}

/// Reads a big-endian 32 bytes word which must fit in a `u64`.
pub fn read_word_u64(buf: &mut &[u8], field: &'static str) -> Result<u64, DecodingError> {
    let word = read_word(buf, field)?;
    u64::try_from(word).map_err(|_| DecodingError::malformed(field, "value overflows u64"))
}

/// Reads an address encoded in the low 20 bytes of a 32 bytes word.
pub fn read_word_address(buf: &mut &[u8], field: &'static str) -> Result<Address, DecodingError> {
    let word = take(buf, WORD_SIZE, field)?;
    Ok(Address::from_slice(&word[WORD_SIZE - ADDRESS_SIZE..]))
}

/// Reads a word encoded destination. The zero address stands for a contract creation.
pub fn read_word_destination(
    buf: &mut &[u8],
    field: &'static str,
) -> Result<TxKind, DecodingError> {
    let to = read_word_address(buf, field)?;
    Ok(if to.is_zero() { TxKind::Create } else { TxKind::Call(to) })
}

/// Reads a big integer of at most 32 bytes prefixed by its one byte length. The encoding must be
/// minimal: zero is encoded with a zero length and a non empty encoding has no leading zero.
pub fn read_length_prefixed_u256(
    buf: &mut &[u8],
    field: &'static str,
) -> Result<U256, DecodingError> {
    let len = read_u8(buf, field)? as usize;
    if len > WORD_SIZE {
        return Err(DecodingError::malformed(field, "length exceeds 32 bytes"))
    }
    let bytes = take(buf, len, field)?;
    if bytes.first() == Some(&0) {
        return Err(DecodingError::malformed(field, "non minimal encoding"))
    }
    Ok(U256::from_be_slice(bytes))
}
