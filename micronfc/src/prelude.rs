// micronfc/src/prelude.rs

pub use crate::device::{Board, BoardBuilder, BoardConfig, Closed, Opened};
pub use crate::ndef::NdefRecord;
pub use crate::protocol::{Command, Response};
pub use crate::transport::Transport;
pub use crate::{
    BoardId, BoardInfo, Error, Opcode, ProtocolVersion, RecordDescriptor, RecordType, Result,
    Role, StatusFlags, TagType, TextEncoding, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms, parse_hex};
