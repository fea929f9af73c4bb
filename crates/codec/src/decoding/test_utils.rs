use crate::Codec;

use alloy_primitives::{hex, Bytes};
use rollup_inbox_primitives::IncomingMessage;

/// Reads the 0x prefixed hex file at `path`, ignoring surrounding whitespace.
pub fn read_hex_file<P: AsRef<std::path::Path>>(path: P) -> eyre::Result<Bytes> {
    let raw = std::fs::read_to_string(path)?;
    Ok(hex::decode(raw.trim())?.into())
}

/// Reads the hex file at `path` and parses it as an [`IncomingMessage`] with the default codec.
pub fn read_message<P: AsRef<std::path::Path>>(path: P) -> eyre::Result<IncomingMessage> {
    Ok(Codec::default().parse(&read_hex_file(path)?, None)?)
}
