use crate::{
    decoding::reader::{read_u8, read_word, read_word_u64},
    error::DecodingError,
};

use alloy_primitives::{Bytes, ChainId, U256};

/// The payload of the chain initialization message. It is consumed when building the genesis
/// state and never expanded into transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPayload {
    /// The chain id.
    pub chain_id: ChainId,
    /// The initial L1 base fee, if provided.
    pub initial_l1_base_fee: Option<U256>,
    /// The serialized chain configuration, empty if not provided.
    pub chain_config: Bytes,
}

impl InitPayload {
    /// Decodes the payload. A bare 32 bytes chain id is accepted; longer payloads carry a version
    /// byte, followed for version 1 by the initial L1 base fee, and then the serialized chain
    /// configuration.
    pub fn decode(mut buf: &[u8]) -> Result<Self, DecodingError> {
        let buf = &mut buf;
        let chain_id = read_word_u64(buf, "chain id")?;
        if buf.is_empty() {
            return Ok(Self { chain_id, initial_l1_base_fee: None, chain_config: Bytes::new() })
        }

        let initial_l1_base_fee = match read_u8(buf, "init version")? {
            0 => None,
            1 => Some(read_word(buf, "initial l1 base fee")?),
            _ => return Err(DecodingError::malformed("init version", "unsupported version")),
        };
        let chain_config = Bytes::copy_from_slice(*buf);

        Ok(Self { chain_id, initial_l1_base_fee, chain_config })
    }
}
