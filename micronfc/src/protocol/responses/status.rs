// micronfc/src/protocol/responses/status.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::{ProtocolVersion, StatusFlags};

/// Decode a GET_STATUS payload (after the response header)
/// Layout V2: bitfield(4, BE)
/// Layout V1: bitfield(1)
pub fn decode_status(data: &[u8], version: ProtocolVersion) -> Result<StatusFlags> {
    let raw = match version {
        ProtocolVersion::V2 => parser::be_u32_at(data, 0)?,
        ProtocolVersion::V1 => u32::from(parser::byte_at(data, 0)?),
    };
    Ok(StatusFlags::from_bits(raw, version))
}
