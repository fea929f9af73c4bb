//! The codec for rollup inbox messages.
//!
//! Messages are encoded in a canonical layout: the kind tag, the poster, the L1 block number
//! and timestamp, the optional request id, the L1 base fee, the optional L2 block hash and
//! finally the payload, which spans the rest of the input.

pub mod decoding;

pub mod encoding;

pub use error::{BoxError, CodecError, DecodingError, EncodingError};
mod error;

pub mod payload;

use crate::{decoding::MAX_HEADER_SIZE, payload::BatchPostingReportPayload};
use std::{fmt, io::Read};

use alloy_primitives::Bytes;
use rollup_inbox_primitives::{batch_data_gas, IncomingMessage, MessageKind, ProtocolRevision};

/// The maximum size of an L2 message payload.
pub const MAX_L2_MESSAGE_SIZE: usize = 256 * 1024;

/// Values that implement the trait can provide the data of a posted batch from its sequence
/// number.
pub trait BatchFetcher {
    /// Returns the data of the batch.
    fn fetch_batch(&self, batch_number: u64) -> Result<Bytes, BoxError>;
}

impl<F> BatchFetcher for F
where
    F: Fn(u64) -> Result<Bytes, BoxError>,
{
    fn fetch_batch(&self, batch_number: u64) -> Result<Bytes, BoxError> {
        self(batch_number)
    }
}

/// The context of a parse.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    /// The protocol revision active on the chain.
    pub revision: ProtocolRevision,
    /// A fetcher used to compute the gas cost of reported batches.
    pub batch_fetcher: Option<&'a dyn BatchFetcher>,
}

impl<'a> ParseContext<'a> {
    /// Returns a new [`ParseContext`] at the provided revision, without a batch fetcher.
    pub const fn new(revision: ProtocolRevision) -> Self {
        Self { revision, batch_fetcher: None }
    }

    /// Sets the batch fetcher.
    pub const fn with_batch_fetcher(mut self, batch_fetcher: &'a dyn BatchFetcher) -> Self {
        self.batch_fetcher = Some(batch_fetcher);
        self
    }
}

impl Default for ParseContext<'_> {
    fn default() -> Self {
        Self::new(ProtocolRevision::LATEST)
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("revision", &self.revision)
            .field("batch_fetcher", &self.batch_fetcher.map(|_| "Some( ... )").unwrap_or("None"))
            .finish()
    }
}

/// The configuration of the [`Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// The maximum size of a message payload.
    pub max_payload_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { max_payload_size: MAX_L2_MESSAGE_SIZE }
    }
}

/// The Codec.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Returns a new [`Codec`] with the provided configuration.
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the codec.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Serializes the message into its canonical layout.
    pub fn serialize(&self, message: &IncomingMessage) -> Result<Bytes, EncodingError> {
        encoding::encode_message(message, self.config.max_payload_size)
    }

    /// Parses a message from its canonical layout. Without a context, all kinds known to this
    /// implementation are accepted and the batch gas cost is left empty.
    pub fn parse(
        &self,
        input: &[u8],
        ctx: Option<&ParseContext<'_>>,
    ) -> Result<IncomingMessage, DecodingError> {
        let ctx = ctx.copied().unwrap_or_default();
        let mut message =
            decoding::decode_message(&mut &input[..], ctx.revision, self.config.max_payload_size)?;

        if let Some(fetcher) = ctx.batch_fetcher {
            fill_batch_gas_cost(&mut message, fetcher)?;
        }

        tracing::trace!(
            target: "inbox::codec",
            kind = %message.header.kind,
            block_number = message.header.block_number,
            payload_len = message.payload.len(),
            "parsed incoming message"
        );

        Ok(message)
    }

    /// Reads a message from the reader until its end and parses it. At most one byte more than
    /// the largest valid message is read.
    pub fn parse_reader<R: Read>(
        &self,
        reader: R,
        ctx: Option<&ParseContext<'_>>,
    ) -> Result<IncomingMessage, DecodingError> {
        let limit = MAX_HEADER_SIZE.saturating_add(self.config.max_payload_size).saturating_add(1);
        let mut input = Vec::new();
        reader.take(limit as u64).read_to_end(&mut input)?;
        self.parse(&input, ctx)
    }
}

/// Computes the gas cost of the data of the batch reported by a
/// [`MessageKind::BatchPostingReport`] message, if the message does not hold it already. The extra
/// gas of the report is left to the expansion.
fn fill_batch_gas_cost(
    message: &mut IncomingMessage,
    fetcher: &dyn BatchFetcher,
) -> Result<(), DecodingError> {
    if message.header.kind != MessageKind::BatchPostingReport || message.batch_gas_cost.is_some() {
        return Ok(())
    }

    let report = BatchPostingReportPayload::decode(&message.payload)?;
    let data = fetcher
        .fetch_batch(report.batch_number)
        .map_err(|source| DecodingError::BatchFetch { batch_number: report.batch_number, source })?;
    message.batch_gas_cost = Some(batch_data_gas(&data));

    Ok(())
}
