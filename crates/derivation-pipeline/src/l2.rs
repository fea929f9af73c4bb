//! Expansion of the L2 message tree carried by [`MessageKind::L2Message`] messages.
//!
//! [`MessageKind::L2Message`]: rollup_inbox_primitives::MessageKind::L2Message

use crate::{EntryError, Expansion, SkippedEntry};

use alloy_consensus::{Transaction as _, TxEnvelope};
use alloy_eips::eip2718::Decodable2718;
use alloy_primitives::{Address, ChainId, B256};
use rollup_inbox_codec::payload::{BatchEntries, L2MessageKind, UnsignedTxPayload};
use rollup_inbox_primitives::{derive_request_id, Transaction, TxContract, TxUnsigned};

/// The maximum nesting of batches in an L2 message.
pub const MAX_BATCH_DEPTH: usize = 16;

/// Expands the L2 message tree of a single message into an [`Expansion`].
#[derive(Debug)]
pub(crate) struct L2MessageExpander<'a> {
    chain_id: ChainId,
    poster: Address,
    max_entry_size: usize,
    expansion: &'a mut Expansion,
}

impl<'a> L2MessageExpander<'a> {
    pub(crate) const fn new(
        chain_id: ChainId,
        poster: Address,
        max_entry_size: usize,
        expansion: &'a mut Expansion,
    ) -> Self {
        Self { chain_id, poster, max_entry_size, expansion }
    }

    /// Expands the message. Entries that fail are recorded as skipped and never abort the
    /// expansion of their siblings.
    pub(crate) fn expand(&mut self, message: &[u8], request_id: Option<B256>) {
        let mut path = Vec::new();
        self.expand_entry(message, request_id, &mut path, 0);
    }

    fn expand_entry(
        &mut self,
        entry: &[u8],
        request_id: Option<B256>,
        path: &mut Vec<usize>,
        depth: usize,
    ) {
        if let Err(reason) = self.try_expand_entry(entry, request_id, path, depth) {
            self.skip(path, request_id, reason);
        }
    }

    fn try_expand_entry(
        &mut self,
        entry: &[u8],
        request_id: Option<B256>,
        path: &mut Vec<usize>,
        depth: usize,
    ) -> Result<(), EntryError> {
        let (kind, body) = L2MessageKind::split(entry)?;
        match kind {
            L2MessageKind::UnsignedUserTx => {
                let tx = UnsignedTxPayload::decode_unsigned(body)?;
                self.expansion.transactions.push(unsigned_tx(self.chain_id, self.poster, tx));
            }
            L2MessageKind::ContractTx => {
                let request_id = request_id.ok_or(EntryError::MissingRequestId)?;
                let tx = UnsignedTxPayload::decode_contract(body)?;
                let tx = contract_tx(self.chain_id, self.poster, request_id, tx);
                self.expansion.transactions.push(tx);
            }
            L2MessageKind::Batch => {
                if depth >= MAX_BATCH_DEPTH {
                    return Err(EntryError::MaxDepthExceeded(MAX_BATCH_DEPTH))
                }
                for (index, entry) in BatchEntries::new(body, self.max_entry_size).enumerate() {
                    path.push(index);
                    let request_id = request_id.map(|id| derive_request_id(id, index as u64));
                    match entry {
                        Ok(entry) => self.expand_entry(entry, request_id, path, depth + 1),
                        Err(err) => self.skip(path, request_id, err.into()),
                    }
                    path.pop();
                }
            }
            L2MessageKind::SignedTx => {
                let tx = TxEnvelope::decode_2718_exact(body)?;
                self.check_signed(&tx)?;
                self.expansion.transactions.push(tx.into());
            }
            L2MessageKind::Heartbeat => {}
            L2MessageKind::NonmutatingCall | L2MessageKind::SignedCompressedTx => {
                return Err(EntryError::UnsupportedL2MessageKind(kind))
            }
        }
        Ok(())
    }

    fn check_signed(&self, tx: &TxEnvelope) -> Result<(), EntryError> {
        if tx.is_eip4844() {
            return Err(EntryError::BlobTransaction)
        }
        match tx.chain_id() {
            None => Err(EntryError::UnprotectedTransaction),
            Some(got) if got != self.chain_id => {
                Err(EntryError::ChainIdMismatch { expected: self.chain_id, got })
            }
            Some(_) => Ok(()),
        }
    }

    fn skip(&mut self, path: &[usize], request_id: Option<B256>, reason: EntryError) {
        tracing::warn!(
            target: "inbox::derivation",
            ?path,
            ?request_id,
            %reason,
            "skipping l2 message entry"
        );
        self.expansion.skipped.push(SkippedEntry { path: path.to_vec(), request_id, reason });
    }
}

/// Returns the [`TxUnsigned`] sent by `from`.
pub(crate) fn unsigned_tx(chain_id: ChainId, from: Address, tx: UnsignedTxPayload) -> Transaction {
    TxUnsigned {
        chain_id,
        from,
        nonce: tx.nonce.unwrap_or_default(),
        gas_fee_cap: tx.max_fee_per_gas,
        gas: tx.gas_limit,
        to: tx.to,
        value: tx.value,
        input: tx.input,
    }
    .into()
}

/// Returns the [`TxContract`] sent by `from`.
pub(crate) fn contract_tx(
    chain_id: ChainId,
    from: Address,
    request_id: B256,
    tx: UnsignedTxPayload,
) -> Transaction {
    TxContract {
        chain_id,
        request_id,
        from,
        gas_fee_cap: tx.max_fee_per_gas,
        gas: tx.gas_limit,
        to: tx.to,
        value: tx.value,
        input: tx.input,
    }
    .into()
}
