use alloy_primitives::ChainId;
use rollup_inbox_codec::{CodecConfig, ParseContext, MAX_L2_MESSAGE_SIZE};
use rollup_inbox_primitives::ProtocolRevision;

/// The chain id used when none is configured.
pub const DEFAULT_CHAIN_ID: ChainId = 42161;

/// The inbox arguments.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct InboxConfig {
    /// The chain id transactions are derived for.
    #[arg(long = "inbox.chain-id", value_name = "CHAIN_ID", default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: ChainId,
    /// The maximum size of a message payload.
    #[arg(
        long = "inbox.max-payload-size",
        value_name = "BYTES",
        default_value_t = MAX_L2_MESSAGE_SIZE
    )]
    pub max_payload_size: usize,
    /// The protocol revision active on the chain.
    #[arg(
        long = "inbox.protocol-revision",
        value_name = "REVISION",
        default_value_t = ProtocolRevision::LATEST.0
    )]
    pub protocol_revision: u64,
}

impl InboxConfig {
    /// Returns a new [`InboxConfig`] for the provided chain id, with default limits.
    pub fn new(chain_id: ChainId) -> Self {
        Self { chain_id, ..Default::default() }
    }

    /// Returns the [`CodecConfig`] matching the configuration.
    pub const fn codec_config(&self) -> CodecConfig {
        CodecConfig { max_payload_size: self.max_payload_size }
    }

    /// Returns the configured [`ProtocolRevision`].
    pub const fn protocol_revision(&self) -> ProtocolRevision {
        ProtocolRevision(self.protocol_revision)
    }

    /// Returns a [`ParseContext`] at the configured protocol revision.
    pub const fn parse_context(&self) -> ParseContext<'static> {
        ParseContext::new(self.protocol_revision())
    }
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            max_payload_size: MAX_L2_MESSAGE_SIZE,
            protocol_revision: ProtocolRevision::LATEST.0,
        }
    }
}
