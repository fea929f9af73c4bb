//! Batch gas cost accounting.

/// The base cost of a keccak256 computation.
pub const KECCAK256_GAS: u64 = 30;
/// The cost of each word hashed by keccak256.
pub const KECCAK256_WORD_GAS: u64 = 6;
/// The cost of a zero byte of calldata.
pub const TX_DATA_ZERO_GAS: u64 = 4;
/// The cost of a non zero byte of calldata.
pub const TX_DATA_NON_ZERO_GAS: u64 = 16;
/// The cost of setting a storage slot from zero.
pub const SSTORE_SET_GAS: u64 = 20_000;

/// Statistics over the data of a posted batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchDataStats {
    /// The length of the batch data.
    pub length: u64,
    /// The count of non zero bytes in the batch data.
    pub non_zeros: u64,
}

impl BatchDataStats {
    /// Returns the statistics of the provided batch data.
    pub fn new(data: &[u8]) -> Self {
        let non_zeros = data.iter().filter(|b| **b != 0).count();
        Self { length: data.len() as u64, non_zeros: non_zeros as u64 }
    }

    /// Returns the gas cost of posting a batch with these statistics:
    /// `30 + 6 * words + 4 * zeros + 16 * non_zeros + 2 * 20000`.
    pub fn legacy_cost(&self) -> u64 {
        let words = self.length.div_ceil(32);
        let zeros = self.length.saturating_sub(self.non_zeros);
        KECCAK256_GAS
            .saturating_add(words.saturating_mul(KECCAK256_WORD_GAS))
            .saturating_add(zeros.saturating_mul(TX_DATA_ZERO_GAS))
            .saturating_add(self.non_zeros.saturating_mul(TX_DATA_NON_ZERO_GAS))
            .saturating_add(2 * SSTORE_SET_GAS)
    }
}

/// Returns the gas cost of posting the batch data.
pub fn batch_data_gas(data: &[u8]) -> u64 {
    BatchDataStats::new(data).legacy_cost()
}

/// Returns the gas attributed to a reported batch: the cost of its data, or of an empty batch
/// when the data is unknown, plus the extra gas declared in its report.
pub fn reported_batch_gas(batch_data_gas: Option<u64>, extra_gas: u64) -> u64 {
    batch_data_gas
        .unwrap_or_else(|| BatchDataStats::default().legacy_cost())
        .saturating_add(extra_gas)
}
