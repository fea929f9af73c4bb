use crate::{
    decoding::reader::{read_address, read_b256, read_u64, read_word, read_word_u64},
    error::DecodingError,
};

use alloy_primitives::{Address, B256, U256};

/// The payload of a batch posting report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPostingReportPayload {
    /// The timestamp of the batch.
    pub batch_timestamp: U256,
    /// The poster of the batch.
    pub batch_poster: Address,
    /// The hash of the batch data.
    pub data_hash: B256,
    /// The sequence number of the batch.
    pub batch_number: u64,
    /// The L1 base fee paid when posting the batch.
    pub l1_base_fee: U256,
    /// The extra gas charged for the batch on top of its data cost.
    pub extra_gas: u64,
}

impl BatchPostingReportPayload {
    /// Decodes the payload. The trailing extra gas is optional and defaults to zero.
    pub fn decode(mut buf: &[u8]) -> Result<Self, DecodingError> {
        let buf = &mut buf;
        let batch_timestamp = read_word(buf, "batch timestamp")?;
        let batch_poster = read_address(buf, "batch poster")?;
        let data_hash = read_b256(buf, "batch data hash")?;
        let batch_number = read_word_u64(buf, "batch number")?;
        let l1_base_fee = read_word(buf, "batch l1 base fee")?;
        let extra_gas = if buf.is_empty() { 0 } else { read_u64(buf, "batch extra gas")? };

        Ok(Self { batch_timestamp, batch_poster, data_hash, batch_number, l1_base_fee, extra_gas })
    }
}
