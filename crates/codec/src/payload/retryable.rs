use crate::{
    decoding::reader::{read_word, read_word_address, read_word_destination, read_word_u64, take},
    error::DecodingError,
    MAX_L2_MESSAGE_SIZE,
};

use alloy_primitives::{Address, Bytes, TxKind, U256};

/// The payload of a retryable ticket submission. All fields are 32 bytes words, followed by the
/// retry call data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryablePayload {
    /// The destination of the retry.
    pub retry_to: TxKind,
    /// The value sent with the retry.
    pub retry_value: U256,
    /// The value deposited with the ticket.
    pub deposit_value: U256,
    /// The max submission fee.
    pub max_submission_fee: U256,
    /// The account receiving the fee refund.
    pub fee_refund_addr: Address,
    /// The account able to cancel or redeem the ticket.
    pub beneficiary: Address,
    /// The gas limit of the retry.
    pub gas_limit: u64,
    /// The max fee per gas of the retry.
    pub max_fee_per_gas: U256,
    /// The retry call data.
    pub data: Bytes,
}

impl RetryablePayload {
    /// Decodes the payload. The call data is prefixed by its length as a 32 bytes word and bytes
    /// trailing the call data are ignored.
    pub fn decode(mut buf: &[u8]) -> Result<Self, DecodingError> {
        let buf = &mut buf;
        let retry_to = read_word_destination(buf, "retry destination")?;
        let retry_value = read_word(buf, "retry value")?;
        let deposit_value = read_word(buf, "deposit value")?;
        let max_submission_fee = read_word(buf, "max submission fee")?;
        let fee_refund_addr = read_word_address(buf, "fee refund address")?;
        let beneficiary = read_word_address(buf, "beneficiary")?;
        let gas_limit = read_word_u64(buf, "retry gas limit")?;
        let max_fee_per_gas = read_word(buf, "retry max fee per gas")?;

        let data_length = read_word_u64(buf, "retry data length")?;
        if data_length > MAX_L2_MESSAGE_SIZE as u64 {
            return Err(DecodingError::malformed("retry data length", "exceeds the maximum size"))
        }
        let data = Bytes::copy_from_slice(take(buf, data_length as usize, "retry data")?);

        Ok(Self {
            retry_to,
            retry_value,
            deposit_value,
            max_submission_fee,
            fee_refund_addr,
            beneficiary,
            gas_limit,
            max_fee_per_gas,
            data,
        })
    }
}
