//! A stateless transaction expander for the rollup inbox.
//!
//! This crate turns a parsed [`IncomingMessage`] into the ordered list of transactions it
//! produces on L2. L2 messages may carry batches of entries: an entry that fails to decode is
//! reported as a [`SkippedEntry`] next to the transactions of its siblings.

mod abi;
use abi::batchPostingReportCall;

mod config;
pub use config::{InboxConfig, DEFAULT_CHAIN_ID};

mod error;
pub use error::{EntryError, ExpansionError};

mod l2;
pub use l2::MAX_BATCH_DEPTH;
use l2::{contract_tx, unsigned_tx, L2MessageExpander};

mod metrics;
pub use metrics::ExpanderMetrics;

use alloy_primitives::{Address, ChainId, B256, U256};
use alloy_sol_types::SolCall;
use rollup_inbox_codec::{
    payload::{
        BatchPostingReportPayload, EthDepositPayload, L2MessageKind, RetryablePayload,
        UnsignedTxPayload,
    },
    DecodingError,
};
use rollup_inbox_primitives::{
    derive_request_id, reported_batch_gas, IncomingMessage, MessageKind, Transaction, TxDeposit,
    TxInternal, TxSubmitRetryable,
};

/// The gas values attributed to a message at expansion time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GasContext {
    /// The L1 base fee charged to retryable submissions.
    pub l1_base_fee: U256,
    /// The gas cost of the batch reported by a batch posting report, if known.
    pub batch_gas_cost: Option<u64>,
}

impl GasContext {
    /// Returns the [`GasContext`] carried by the message itself.
    pub const fn from_message(message: &IncomingMessage) -> Self {
        Self { l1_base_fee: message.header.l1_base_fee, batch_gas_cost: message.batch_gas_cost }
    }
}

/// An entry of an L2 message that did not produce a transaction.
#[derive(Debug)]
pub struct SkippedEntry {
    /// The position of the entry in the nested batches, empty for the root entry.
    pub path: Vec<usize>,
    /// The request id derived for the entry, if the message has one.
    pub request_id: Option<B256>,
    /// Why the entry was skipped.
    pub reason: EntryError,
}

/// The result of the expansion of a message.
#[derive(Debug, Default)]
pub struct Expansion {
    /// The derived transactions, in order.
    pub transactions: Vec<Transaction>,
    /// The skipped entries, in order.
    pub skipped: Vec<SkippedEntry>,
    /// The L2 block hash attached to the message, untouched.
    pub l2_block_hash: Option<B256>,
}

impl Expansion {
    fn new(l2_block_hash: Option<B256>) -> Self {
        Self { l2_block_hash, ..Default::default() }
    }

    fn with_transactions(
        l2_block_hash: Option<B256>,
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> Self {
        Self { transactions: transactions.into_iter().collect(), ..Self::new(l2_block_hash) }
    }
}

/// Expands the message into transactions for the provided chain id. See [`Expander::expand`].
pub fn expand(
    message: &IncomingMessage,
    chain_id: ChainId,
    gas: Option<GasContext>,
) -> Result<Expansion, ExpansionError> {
    Expander::new(InboxConfig::new(chain_id)).expand(message, gas)
}

/// The transaction expander.
#[derive(Debug, Clone)]
pub struct Expander {
    /// The configuration of the expander.
    config: InboxConfig,
    /// The metrics of the expander.
    metrics: ExpanderMetrics,
}

impl Expander {
    /// Returns a new instance of the [`Expander`].
    pub fn new(config: InboxConfig) -> Self {
        Self { config, metrics: ExpanderMetrics::default() }
    }

    /// Returns the configuration of the expander.
    pub const fn config(&self) -> &InboxConfig {
        &self.config
    }

    /// Expands the message into the transactions it produces. The gas context defaults to the
    /// values carried by the message.
    pub fn expand(
        &self,
        message: &IncomingMessage,
        gas: Option<GasContext>,
    ) -> Result<Expansion, ExpansionError> {
        let gas = gas.unwrap_or_else(|| GasContext::from_message(message));
        let result = self.expand_message(message, gas);

        match &result {
            Ok(expansion) => {
                self.metrics.expanded_messages.increment(1);
                self.metrics.derived_transactions.increment(expansion.transactions.len() as u64);
                self.metrics.skipped_entries.increment(expansion.skipped.len() as u64);
            }
            Err(err) => {
                self.metrics.failed_messages.increment(1);
                tracing::debug!(
                    target: "inbox::derivation",
                    kind = %message.kind(),
                    %err,
                    "failed to expand message"
                );
            }
        }

        result
    }

    fn expand_message(
        &self,
        message: &IncomingMessage,
        gas: GasContext,
    ) -> Result<Expansion, ExpansionError> {
        let header = &message.header;
        let kind = header.kind;
        let chain_id = self.config.chain_id;
        let l2_block_hash = message.l2_block_hash;
        let malformed = |source: DecodingError| ExpansionError::MalformedPayload { kind, source };

        let revision = self.config.protocol_revision();
        if !kind.is_active_at(revision) {
            return Err(ExpansionError::KindNotActivated { kind, revision })
        }

        let expansion = match kind {
            MessageKind::EndOfBlock | MessageKind::RollupEvent => {
                tracing::debug!(target: "inbox::derivation", %kind, "ignoring message");
                Expansion::new(l2_block_hash)
            }
            MessageKind::L2Message => {
                let mut expansion = Expansion::new(l2_block_hash);
                L2MessageExpander::new(
                    chain_id,
                    header.poster,
                    self.config.max_payload_size,
                    &mut expansion,
                )
                .expand(&message.payload, header.request_id);
                expansion
            }
            MessageKind::L2FundedByL1 => {
                let request_id = header.request_id.ok_or(ExpansionError::MissingRequestId(kind))?;
                let tx = funded_tx(chain_id, header.poster, request_id, &message.payload)
                    .map_err(malformed)?;
                let deposit = TxDeposit {
                    chain_id,
                    l1_request_id: derive_request_id(request_id, 0),
                    from: Address::ZERO,
                    to: header.poster,
                    value: tx_value(&tx),
                };
                Expansion::with_transactions(l2_block_hash, [deposit.into(), tx])
            }
            MessageKind::SubmitRetryable => {
                let request_id = header.request_id.ok_or(ExpansionError::MissingRequestId(kind))?;
                let ticket = RetryablePayload::decode(&message.payload).map_err(malformed)?;
                let tx = TxSubmitRetryable {
                    chain_id,
                    request_id,
                    from: header.poster,
                    l1_base_fee: gas.l1_base_fee,
                    deposit_value: ticket.deposit_value,
                    gas_fee_cap: ticket.max_fee_per_gas,
                    gas: ticket.gas_limit,
                    retry_to: ticket.retry_to,
                    retry_value: ticket.retry_value,
                    beneficiary: ticket.beneficiary,
                    max_submission_fee: ticket.max_submission_fee,
                    fee_refund_addr: ticket.fee_refund_addr,
                    retry_data: ticket.data,
                };
                Expansion::with_transactions(l2_block_hash, [tx.into()])
            }
            MessageKind::EthDeposit => {
                let request_id = header.request_id.ok_or(ExpansionError::MissingRequestId(kind))?;
                let deposit = EthDepositPayload::decode(&message.payload).map_err(malformed)?;
                let tx = TxDeposit {
                    chain_id,
                    l1_request_id: request_id,
                    from: header.poster,
                    to: deposit.to,
                    value: deposit.value,
                };
                Expansion::with_transactions(l2_block_hash, [tx.into()])
            }
            MessageKind::BatchPostingReport => {
                let report =
                    BatchPostingReportPayload::decode(&message.payload).map_err(malformed)?;
                let batch_data_gas = reported_batch_gas(gas.batch_gas_cost, report.extra_gas);
                let input = batchPostingReportCall {
                    batchTimestamp: report.batch_timestamp,
                    batchPosterAddress: report.batch_poster,
                    batchNumber: report.batch_number,
                    batchDataGas: batch_data_gas,
                    l1BaseFeeWei: report.l1_base_fee,
                }
                .abi_encode();
                let tx = TxInternal { chain_id, input: input.into() };
                Expansion::with_transactions(l2_block_hash, [tx.into()])
            }
            MessageKind::Initialize | MessageKind::BatchForGasEstimation | MessageKind::Invalid => {
                return Err(ExpansionError::UnsupportedMessageKind(kind))
            }
        };

        Ok(expansion)
    }
}

/// Decodes the transaction of a [`MessageKind::L2FundedByL1`] message, which is either an
/// unsigned or a contract transaction.
fn funded_tx(
    chain_id: ChainId,
    poster: Address,
    request_id: B256,
    payload: &[u8],
) -> Result<Transaction, DecodingError> {
    let (kind, body) = L2MessageKind::split(payload)?;
    match kind {
        L2MessageKind::UnsignedUserTx => {
            Ok(unsigned_tx(chain_id, poster, UnsignedTxPayload::decode_unsigned(body)?))
        }
        L2MessageKind::ContractTx => {
            let tx = UnsignedTxPayload::decode_contract(body)?;
            Ok(contract_tx(chain_id, poster, derive_request_id(request_id, 1), tx))
        }
        _ => Err(DecodingError::malformed("l2 message kind", "not a funded transaction kind")),
    }
}

/// Returns the value transferred by an unsigned or contract transaction.
const fn tx_value(tx: &Transaction) -> U256 {
    match tx {
        Transaction::Unsigned(tx) => tx.value,
        Transaction::Contract(tx) => tx.value,
        _ => U256::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_consensus::{SignableTransaction, TxEip1559, TxEip4844, TxEnvelope, TxLegacy};
    use alloy_eips::eip2718::Encodable2718;
    use alloy_primitives::{address, Bytes, Signature, TxKind};
    use rollup_inbox_codec::decoding::test_utils::read_message;
    use rollup_inbox_primitives::{MessageHeader, ProtocolRevision};

    const CHAIN_ID: ChainId = 6345634;
    const POSTER: Address = address!("000000000000000000000000000000000000124c");

    fn request_id() -> B256 {
        B256::with_last_byte(3)
    }

    fn message(kind: MessageKind, payload: Vec<u8>) -> IncomingMessage {
        let header = MessageHeader::new(kind, POSTER)
            .with_block_number(864513)
            .with_timestamp(8794561564)
            .with_request_id(request_id())
            .with_l1_base_fee(U256::from(10_000_000_000_000u64));
        IncomingMessage::new(header, payload.into())
    }

    fn word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes()
    }

    fn address_word(address: Address) -> [u8; 32] {
        B256::left_padding_from(address.as_slice()).0
    }

    fn unsigned_body(kind: L2MessageKind, nonce: Option<u64>, value: u64) -> Vec<u8> {
        let mut out = vec![kind as u8];
        out.extend_from_slice(&word(21_000));
        out.extend_from_slice(&word(1_000_000_000));
        if let Some(nonce) = nonce {
            out.extend_from_slice(&word(nonce));
        }
        out.extend_from_slice(&address_word(address!("00000000000000000000000000000000000000c0")));
        out.extend_from_slice(&word(value));
        out
    }

    fn signed_tx(chain_id: Option<ChainId>) -> Vec<u8> {
        let envelope: TxEnvelope = match chain_id {
            Some(chain_id) => TxEip1559 {
                chain_id,
                nonce: 1,
                gas_limit: 21_000,
                to: TxKind::Call(address!("00000000000000000000000000000000000000c0")),
                ..Default::default()
            }
            .into_signed(Signature::test_signature())
            .into(),
            None => TxLegacy { chain_id: None, gas_limit: 21_000, ..Default::default() }
                .into_signed(Signature::test_signature())
                .into(),
        };
        let mut out = vec![L2MessageKind::SignedTx as u8];
        out.extend(envelope.encoded_2718());
        out
    }

    fn batch(entries: &[Vec<u8>]) -> Vec<u8> {
        let mut out = vec![L2MessageKind::Batch as u8];
        for entry in entries {
            out.extend_from_slice(&(entry.len() as u64).to_be_bytes());
            out.extend_from_slice(entry);
        }
        out
    }

    fn report_payload(batch_number: u64, extra_gas: u64) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&word(1_700_000_000));
        out.extend_from_slice(address!("00000000000000000000000000000000000000ba").as_slice());
        out.extend_from_slice(B256::with_last_byte(0xdd).as_slice());
        out.extend_from_slice(&word(batch_number));
        out.extend_from_slice(&word(30_000_000_000));
        out.extend_from_slice(&extra_gas.to_be_bytes());
        out
    }

    #[test]
    fn test_should_expand_end_of_block() -> eyre::Result<()> {
        let message = read_message("../codec/testdata/end_of_block.hex")?;
        let expansion = expand(&message, CHAIN_ID, None)?;
        assert!(expansion.transactions.is_empty());
        assert!(expansion.skipped.is_empty());
        assert_eq!(expansion.l2_block_hash, None);

        let message = read_message("../codec/testdata/end_of_block_with_l2_block_hash.hex")?;
        let expansion = expand(&message, CHAIN_ID, None)?;
        assert!(expansion.transactions.is_empty());
        assert_eq!(expansion.l2_block_hash, Some(B256::with_last_byte(4)));

        for chain_id in [0, 1, CHAIN_ID, u64::MAX] {
            let expansion = expand(&message, chain_id, None)?;
            assert!(expansion.transactions.is_empty());
        }

        Ok(())
    }

    #[test]
    fn test_should_reject_unsupported_kinds() {
        let kinds =
            [MessageKind::Initialize, MessageKind::BatchForGasEstimation, MessageKind::Invalid];
        for kind in kinds {
            let err = expand(&message(kind, vec![]), CHAIN_ID, None).unwrap_err();
            assert!(matches!(err, ExpansionError::UnsupportedMessageKind(k) if k == kind));
        }
    }

    #[test]
    fn test_should_expand_eth_deposit() -> eyre::Result<()> {
        let to = address!("00000000000000000000000000000000000000d0");
        let mut payload = to.to_vec();
        payload.extend_from_slice(&word(1_000));

        let expansion = expand(&message(MessageKind::EthDeposit, payload.clone()), CHAIN_ID, None)?;
        assert_eq!(
            expansion.transactions,
            vec![Transaction::Deposit(TxDeposit {
                chain_id: CHAIN_ID,
                l1_request_id: request_id(),
                from: POSTER,
                to,
                value: U256::from(1_000),
            })]
        );

        // a deposit requires a request id.
        let mut msg = message(MessageKind::EthDeposit, payload);
        msg.header.request_id = None;
        let err = expand(&msg, CHAIN_ID, None).unwrap_err();
        assert!(matches!(err, ExpansionError::MissingRequestId(MessageKind::EthDeposit)));

        // a truncated payload is malformed.
        let err = expand(&message(MessageKind::EthDeposit, vec![0; 30]), CHAIN_ID, None)
            .unwrap_err();
        assert!(matches!(
            err,
            ExpansionError::MalformedPayload {
                kind: MessageKind::EthDeposit,
                source: DecodingError::TruncatedInput { .. }
            }
        ));

        Ok(())
    }

    #[test]
    fn test_chain_id_isolation() -> eyre::Result<()> {
        let mut payload = address!("00000000000000000000000000000000000000d0").to_vec();
        payload.extend_from_slice(&word(1_000));
        let msg = message(MessageKind::EthDeposit, payload);

        let a = expand(&msg, CHAIN_ID, None)?;
        let b = expand(&msg, CHAIN_ID + 1, None)?;
        assert_eq!(a.transactions[0].chain_id(), Some(CHAIN_ID));
        assert_eq!(b.transactions[0].chain_id(), Some(CHAIN_ID + 1));
        assert_ne!(a.transactions[0].tx_hash(), b.transactions[0].tx_hash());

        // signed transactions for another chain are skipped.
        let msg = message(MessageKind::L2Message, signed_tx(Some(1)));
        let expansion = expand(&msg, CHAIN_ID, None)?;
        assert!(expansion.transactions.is_empty());
        assert!(matches!(
            expansion.skipped[0].reason,
            EntryError::ChainIdMismatch { expected: CHAIN_ID, got: 1 }
        ));

        let expansion = expand(&msg, 1, None)?;
        assert_eq!(expansion.transactions.len(), 1);
        assert!(expansion.skipped.is_empty());

        Ok(())
    }

    #[test]
    fn test_should_skip_unprotected_and_blob_transactions() -> eyre::Result<()> {
        let msg = message(MessageKind::L2Message, signed_tx(None));
        let expansion = expand(&msg, CHAIN_ID, None)?;
        assert!(matches!(expansion.skipped[0].reason, EntryError::UnprotectedTransaction));

        let blob: TxEnvelope = TxEip4844 { chain_id: CHAIN_ID, ..Default::default() }
            .into_signed(Signature::test_signature())
            .into();
        let mut payload = vec![L2MessageKind::SignedTx as u8];
        payload.extend(blob.encoded_2718());
        let expansion = expand(&message(MessageKind::L2Message, payload), CHAIN_ID, None)?;
        assert!(expansion.transactions.is_empty());
        assert!(matches!(expansion.skipped[0].reason, EntryError::BlobTransaction));

        Ok(())
    }

    #[test]
    fn test_batch_partial_failure() -> eyre::Result<()> {
        let payload = batch(&[
            unsigned_body(L2MessageKind::UnsignedUserTx, Some(7), 1),
            vec![0xff],
            batch(&[
                unsigned_body(L2MessageKind::ContractTx, None, 2),
                vec![L2MessageKind::NonmutatingCall as u8],
            ]),
            vec![L2MessageKind::Heartbeat as u8],
            signed_tx(Some(CHAIN_ID)),
        ]);
        let expansion = expand(&message(MessageKind::L2Message, payload), CHAIN_ID, None)?;

        assert_eq!(expansion.transactions.len(), 3);
        assert!(matches!(
            &expansion.transactions[0],
            Transaction::Unsigned(tx) if tx.nonce == 7 && tx.from == POSTER
        ));
        let nested_request_id = derive_request_id(derive_request_id(request_id(), 2), 0);
        assert_eq!(expansion.transactions[1].request_id(), Some(nested_request_id));
        assert!(matches!(expansion.transactions[2], Transaction::Signed(_)));

        assert_eq!(expansion.skipped.len(), 2);
        assert_eq!(expansion.skipped[0].path, vec![1]);
        assert_eq!(expansion.skipped[0].request_id, Some(derive_request_id(request_id(), 1)));
        assert!(matches!(
            expansion.skipped[0].reason,
            EntryError::Decoding(DecodingError::UnknownL2MessageKind(0xff))
        ));
        assert_eq!(expansion.skipped[1].path, vec![2, 1]);
        assert!(matches!(
            expansion.skipped[1].reason,
            EntryError::UnsupportedL2MessageKind(L2MessageKind::NonmutatingCall)
        ));

        Ok(())
    }

    #[test]
    fn test_batch_truncated_frame() -> eyre::Result<()> {
        let mut payload = batch(&[unsigned_body(L2MessageKind::UnsignedUserTx, Some(0), 1)]);
        payload.extend_from_slice(&100u64.to_be_bytes());
        payload.extend_from_slice(&[1, 2, 3]);

        let expansion = expand(&message(MessageKind::L2Message, payload), CHAIN_ID, None)?;
        assert_eq!(expansion.transactions.len(), 1);
        assert_eq!(expansion.skipped.len(), 1);
        assert_eq!(expansion.skipped[0].path, vec![1]);
        assert!(matches!(
            expansion.skipped[0].reason,
            EntryError::Decoding(DecodingError::TruncatedInput { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_batch_max_depth() -> eyre::Result<()> {
        let mut payload = unsigned_body(L2MessageKind::UnsignedUserTx, Some(0), 1);
        for _ in 0..=MAX_BATCH_DEPTH {
            payload = batch(&[payload]);
        }

        let expansion = expand(&message(MessageKind::L2Message, payload), CHAIN_ID, None)?;
        assert!(expansion.transactions.is_empty());
        assert_eq!(expansion.skipped.len(), 1);
        assert_eq!(expansion.skipped[0].path.len(), MAX_BATCH_DEPTH);
        assert!(matches!(expansion.skipped[0].reason, EntryError::MaxDepthExceeded(_)));

        Ok(())
    }

    #[test]
    fn test_contract_tx_requires_request_id() -> eyre::Result<()> {
        let mut msg =
            message(MessageKind::L2Message, unsigned_body(L2MessageKind::ContractTx, None, 1));
        msg.header.request_id = None;

        let expansion = expand(&msg, CHAIN_ID, None)?;
        assert!(expansion.transactions.is_empty());
        assert!(expansion.skipped[0].path.is_empty());
        assert!(matches!(expansion.skipped[0].reason, EntryError::MissingRequestId));

        Ok(())
    }

    #[test]
    fn test_should_expand_funded_by_l1() -> eyre::Result<()> {
        let payload = unsigned_body(L2MessageKind::ContractTx, None, 500);
        let expansion = expand(&message(MessageKind::L2FundedByL1, payload), CHAIN_ID, None)?;

        assert_eq!(expansion.transactions.len(), 2);
        assert_eq!(
            expansion.transactions[0],
            Transaction::Deposit(TxDeposit {
                chain_id: CHAIN_ID,
                l1_request_id: derive_request_id(request_id(), 0),
                from: Address::ZERO,
                to: POSTER,
                value: U256::from(500),
            })
        );
        assert_eq!(
            expansion.transactions[1].request_id(),
            Some(derive_request_id(request_id(), 1))
        );

        let payload = vec![L2MessageKind::Batch as u8];
        let err = expand(&message(MessageKind::L2FundedByL1, payload), CHAIN_ID, None).unwrap_err();
        assert!(matches!(err, ExpansionError::MalformedPayload { .. }));

        Ok(())
    }

    #[test]
    fn test_should_expand_retryable() -> eyre::Result<()> {
        let retry_to = address!("00000000000000000000000000000000000000e0");
        let fee_refund_addr = address!("00000000000000000000000000000000000000f1");
        let beneficiary = address!("00000000000000000000000000000000000000b1");

        let mut payload = Vec::new();
        payload.extend_from_slice(&address_word(retry_to));
        payload.extend_from_slice(&word(1));
        payload.extend_from_slice(&word(2));
        payload.extend_from_slice(&word(3));
        payload.extend_from_slice(&address_word(fee_refund_addr));
        payload.extend_from_slice(&address_word(beneficiary));
        payload.extend_from_slice(&word(100_000));
        payload.extend_from_slice(&word(5));
        payload.extend_from_slice(&word(2));
        payload.extend_from_slice(&[0xab, 0xcd]);
        let msg = message(MessageKind::SubmitRetryable, payload);

        let gas = GasContext { l1_base_fee: U256::from(77), batch_gas_cost: None };
        let expansion = expand(&msg, CHAIN_ID, Some(gas))?;
        assert_eq!(
            expansion.transactions,
            vec![Transaction::SubmitRetryable(TxSubmitRetryable {
                chain_id: CHAIN_ID,
                request_id: request_id(),
                from: POSTER,
                l1_base_fee: U256::from(77),
                deposit_value: U256::from(2),
                gas_fee_cap: U256::from(5),
                gas: 100_000,
                retry_to: TxKind::Call(retry_to),
                retry_value: U256::from(1),
                beneficiary,
                max_submission_fee: U256::from(3),
                fee_refund_addr,
                retry_data: Bytes::from_static(&[0xab, 0xcd]),
            })]
        );

        // without a gas context, the header base fee is used.
        let expansion = expand(&msg, CHAIN_ID, None)?;
        assert!(matches!(
            &expansion.transactions[0],
            Transaction::SubmitRetryable(tx) if tx.l1_base_fee == msg.header.l1_base_fee
        ));

        Ok(())
    }

    #[test]
    fn test_should_expand_batch_posting_report() -> eyre::Result<()> {
        let decode = |expansion: &Expansion| -> eyre::Result<batchPostingReportCall> {
            let Transaction::Internal(tx) = &expansion.transactions[0] else {
                eyre::bail!("expected an internal transaction")
            };
            assert_eq!(tx.chain_id, CHAIN_ID);
            Ok(batchPostingReportCall::abi_decode(&tx.input)?)
        };
        let msg = message(MessageKind::BatchPostingReport, report_payload(42, 1_000));

        // without a known cost, the extra gas is added to the cost of an empty batch.
        let call = decode(&expand(&msg, CHAIN_ID, None)?)?;
        assert_eq!(call.batchDataGas, 41_030);
        assert_eq!(call.batchNumber, 42);
        assert_eq!(call.batchPosterAddress, address!("00000000000000000000000000000000000000ba"));
        assert_eq!(call.l1BaseFeeWei, U256::from(30_000_000_000u64));
        assert_eq!(call.batchTimestamp, U256::from(1_700_000_000u64));

        // the extra gas is added to a cost computed at parse time.
        let call = decode(&expand(&msg.clone().with_batch_gas_cost(50_000), CHAIN_ID, None)?)?;
        assert_eq!(call.batchDataGas, 51_000);

        // the gas context takes precedence over the message.
        let gas = GasContext { l1_base_fee: U256::ZERO, batch_gas_cost: Some(12) };
        let call = decode(&expand(&msg, CHAIN_ID, Some(gas))?)?;
        assert_eq!(call.batchDataGas, 1_012);

        Ok(())
    }

    #[test]
    fn test_should_reject_kinds_not_activated() -> eyre::Result<()> {
        let config = InboxConfig { protocol_revision: 0, ..InboxConfig::new(CHAIN_ID) };
        let expander = Expander::new(config);

        let msg = message(MessageKind::BatchPostingReport, report_payload(42, 1_000));
        let err = expander.expand(&msg, None).unwrap_err();
        assert!(matches!(
            err,
            ExpansionError::KindNotActivated {
                kind: MessageKind::BatchPostingReport,
                revision: ProtocolRevision::GENESIS,
            }
        ));
        assert!(err.requires_protocol_upgrade());

        // kinds active at genesis are still expanded.
        let expansion = expander.expand(&message(MessageKind::EndOfBlock, vec![]), None)?;
        assert!(expansion.transactions.is_empty());

        // the default expander runs at the latest revision.
        let expansion = expand(&msg, CHAIN_ID, None)?;
        assert_eq!(expansion.transactions.len(), 1);

        Ok(())
    }

    #[test]
    fn test_should_ignore_rollup_events() -> eyre::Result<()> {
        let expander = Expander::new(InboxConfig::new(CHAIN_ID));
        let expansion = expander.expand(&message(MessageKind::RollupEvent, vec![1, 2, 3]), None)?;
        assert!(expansion.transactions.is_empty());
        assert!(expansion.skipped.is_empty());
        Ok(())
    }
}
