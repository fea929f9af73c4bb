use crate::{
    decoding::reader::{read_address, read_word},
    error::DecodingError,
};

use alloy_primitives::{Address, U256};

/// The payload of an ETH deposit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthDepositPayload {
    /// The recipient of the deposit.
    pub to: Address,
    /// The deposited value.
    pub value: U256,
}

impl EthDepositPayload {
    /// Decodes the payload: a 20 bytes recipient followed by the value as a 32 bytes word.
    pub fn decode(mut buf: &[u8]) -> Result<Self, DecodingError> {
        let to = read_address(&mut buf, "deposit recipient")?;
        let value = read_word(&mut buf, "deposit value")?;
        Ok(Self { to, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_should_decode_deposit() -> eyre::Result<()> {
        let to = address!("00000000000000000000000000000000000000aa");
        let mut payload = to.to_vec();
        payload.extend_from_slice(&U256::from(7).to_be_bytes::<32>());

        let expected = EthDepositPayload { to, value: U256::from(7) };
        assert_eq!(EthDepositPayload::decode(&payload)?, expected);
        assert!(matches!(
            EthDepositPayload::decode(&payload[..40]),
            Err(DecodingError::TruncatedInput { field: "deposit value", remaining: 20, .. })
        ));

        Ok(())
    }
}
