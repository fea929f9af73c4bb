//! The transactions derived from incoming messages.

use alloy_consensus::{Transaction as _, TxEnvelope};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{keccak256, Address, Bytes, ChainId, TxKind, B256, U256};
use alloy_rlp::{Encodable, RlpEncodable};

/// The type byte of a [`TxDeposit`].
pub const DEPOSIT_TX_TYPE: u8 = 0x64;
/// The type byte of a [`TxUnsigned`].
pub const UNSIGNED_TX_TYPE: u8 = 0x65;
/// The type byte of a [`TxContract`].
pub const CONTRACT_TX_TYPE: u8 = 0x66;
/// The type byte of a [`TxSubmitRetryable`].
pub const SUBMIT_RETRYABLE_TX_TYPE: u8 = 0x69;
/// The type byte of a [`TxInternal`].
pub const INTERNAL_TX_TYPE: u8 = 0x6A;

/// Derives the request id of the `index`-th transaction expanded from a message with the
/// provided request id: `keccak256(request_id || uint256(index))`.
pub fn derive_request_id(request_id: B256, index: u64) -> B256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(request_id.as_slice());
    buf[32..].copy_from_slice(&U256::from(index).to_be_bytes::<32>());
    keccak256(buf)
}

/// A deposit of value from L1.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct TxDeposit {
    /// The chain id.
    pub chain_id: ChainId,
    /// The request id of the originating L1 message.
    pub l1_request_id: B256,
    /// The depositor.
    pub from: Address,
    /// The recipient.
    pub to: Address,
    /// The deposited value.
    pub value: U256,
}

/// An unsigned transaction sent from L1 on behalf of the poster.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct TxUnsigned {
    /// The chain id.
    pub chain_id: ChainId,
    /// The sender.
    pub from: Address,
    /// The sender nonce.
    pub nonce: u64,
    /// The max fee per gas.
    pub gas_fee_cap: U256,
    /// The gas limit.
    pub gas: u64,
    /// The destination, or a contract creation.
    pub to: TxKind,
    /// The transferred value.
    pub value: U256,
    /// The call data.
    pub input: Bytes,
}

/// A contract transaction sent from L1, identified by its request id instead of a nonce.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct TxContract {
    /// The chain id.
    pub chain_id: ChainId,
    /// The request id of the originating L1 message.
    pub request_id: B256,
    /// The sender.
    pub from: Address,
    /// The max fee per gas.
    pub gas_fee_cap: U256,
    /// The gas limit.
    pub gas: u64,
    /// The destination, or a contract creation.
    pub to: TxKind,
    /// The transferred value.
    pub value: U256,
    /// The call data.
    pub input: Bytes,
}

/// The submission of a retryable ticket.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct TxSubmitRetryable {
    /// The chain id.
    pub chain_id: ChainId,
    /// The request id of the originating L1 message.
    pub request_id: B256,
    /// The submitter.
    pub from: Address,
    /// The L1 base fee attributed to the submission.
    pub l1_base_fee: U256,
    /// The value deposited with the ticket.
    pub deposit_value: U256,
    /// The max fee per gas for the retry.
    pub gas_fee_cap: U256,
    /// The gas limit for the retry.
    pub gas: u64,
    /// The retry destination, or a contract creation.
    pub retry_to: TxKind,
    /// The value sent with the retry.
    pub retry_value: U256,
    /// The account able to cancel or redeem the ticket.
    pub beneficiary: Address,
    /// The max submission fee.
    pub max_submission_fee: U256,
    /// The account receiving the fee refund.
    pub fee_refund_addr: Address,
    /// The call data of the retry.
    pub retry_data: Bytes,
}

/// A transaction issued by the chain itself.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable)]
pub struct TxInternal {
    /// The chain id.
    pub chain_id: ChainId,
    /// The ABI encoded call data.
    pub input: Bytes,
}

/// A transaction derived from an incoming message.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Transaction {
    /// A deposit.
    Deposit(TxDeposit),
    /// An unsigned transaction.
    Unsigned(TxUnsigned),
    /// A contract transaction.
    Contract(TxContract),
    /// A retryable submission.
    SubmitRetryable(TxSubmitRetryable),
    /// An internal transaction.
    Internal(TxInternal),
    /// A user signed transaction.
    Signed(TxEnvelope),
}

impl Transaction {
    /// Returns the EIP-2718 type byte of the transaction.
    pub fn tx_type(&self) -> u8 {
        match self {
            Self::Deposit(_) => DEPOSIT_TX_TYPE,
            Self::Unsigned(_) => UNSIGNED_TX_TYPE,
            Self::Contract(_) => CONTRACT_TX_TYPE,
            Self::SubmitRetryable(_) => SUBMIT_RETRYABLE_TX_TYPE,
            Self::Internal(_) => INTERNAL_TX_TYPE,
            Self::Signed(tx) => tx.tx_type() as u8,
        }
    }

    /// Returns the chain id the transaction is bound to. Only unprotected legacy signed
    /// transactions return [`None`].
    pub fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Deposit(tx) => Some(tx.chain_id),
            Self::Unsigned(tx) => Some(tx.chain_id),
            Self::Contract(tx) => Some(tx.chain_id),
            Self::SubmitRetryable(tx) => Some(tx.chain_id),
            Self::Internal(tx) => Some(tx.chain_id),
            Self::Signed(tx) => tx.chain_id(),
        }
    }

    /// Returns the request id correlating the transaction to its L1 origin, if any.
    pub const fn request_id(&self) -> Option<B256> {
        match self {
            Self::Deposit(tx) => Some(tx.l1_request_id),
            Self::Contract(tx) => Some(tx.request_id),
            Self::SubmitRetryable(tx) => Some(tx.request_id),
            Self::Unsigned(_) | Self::Internal(_) | Self::Signed(_) => None,
        }
    }

    /// Returns the EIP-2718 encoding of the transaction.
    pub fn encoded(&self) -> Bytes {
        let typed = |ty: u8, tx: &dyn Encodable| {
            let mut buf = Vec::with_capacity(1 + tx.length());
            buf.push(ty);
            tx.encode(&mut buf);
            Bytes::from(buf)
        };
        match self {
            Self::Deposit(tx) => typed(DEPOSIT_TX_TYPE, tx),
            Self::Unsigned(tx) => typed(UNSIGNED_TX_TYPE, tx),
            Self::Contract(tx) => typed(CONTRACT_TX_TYPE, tx),
            Self::SubmitRetryable(tx) => typed(SUBMIT_RETRYABLE_TX_TYPE, tx),
            Self::Internal(tx) => typed(INTERNAL_TX_TYPE, tx),
            Self::Signed(tx) => tx.encoded_2718().into(),
        }
    }

    /// Returns the hash of the transaction. The hash commits to the chain id, so the same
    /// transaction derived for two chains never shares a hash.
    pub fn tx_hash(&self) -> B256 {
        match self {
            Self::Signed(tx) => *tx.tx_hash(),
            _ => keccak256(self.encoded()),
        }
    }
}
