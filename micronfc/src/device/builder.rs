// micronfc/src/device/builder.rs

use crate::device::config::BoardConfig;
use crate::device::handle::{Board, Closed, Opened};
use crate::transport::Transport;
use crate::types::ProtocolVersion;
use crate::{Error, Result};

/// Helper to construct a Board with optional configuration.
#[derive(Default)]
pub struct BoardBuilder {
    transport: Option<Box<dyn Transport>>,
    config: BoardConfig,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn protocol_version(mut self, version: ProtocolVersion) -> Self {
        self.config.protocol_version = version;
        self
    }

    pub fn chunk_size(mut self, chunk_size: u16) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    pub fn max_record_depth(mut self, depth: usize) -> Self {
        self.config.max_record_depth = depth;
        self
    }

    pub fn read_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.read_timeout_ms = timeout_ms;
        self
    }

    /// Consume the builder and return a closed Board.
    /// Requires a transport and a valid configuration.
    pub fn build(self) -> Result<Board<Closed>> {
        self.config.validate()?;
        match self.transport {
            Some(t) => Ok(Board::with_config(t, self.config)),
            None => Err(Error::InvalidConfig("no transport provided".into())),
        }
    }

    /// Build and open in one step.
    pub fn open(self) -> Result<Board<Opened>> {
        self.build()?.open()
    }
}
