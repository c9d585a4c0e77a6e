//! Board session configuration

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_RECORD_DEPTH};
use crate::types::ProtocolVersion;
use crate::utils::DEFAULT_READ_TIMEOUT_MS;
use crate::{Error, Result};

/// Per-session settings. The protocol version is never guessed from the
/// board; it is chosen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Firmware protocol generation (status/INFO layouts)
    pub protocol_version: ProtocolVersion,
    /// Upper bound on bytes requested by one NFC_GET_RECORD_DATA
    pub chunk_size: u16,
    /// Maximum smart poster nesting accepted while reading a message
    pub max_record_depth: usize,
    /// Timeout passed to every `Transport::receive`
    pub read_timeout_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            protocol_version: ProtocolVersion::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_record_depth: DEFAULT_MAX_RECORD_DEPTH,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig("chunk_size must be non-zero".into()));
        }
        Ok(())
    }
}
