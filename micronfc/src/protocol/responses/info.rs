// micronfc/src/protocol/responses/info.rs

use crate::Result;
use crate::constants::BOARD_ID_LEN;
use crate::protocol::parser;
use crate::types::{BoardId, BoardInfo, ProtocolVersion};

/// Decode an INFO payload (after the response header)
/// Layout V2: version(2, BE) + revision(2, BE) + board_id(20)
/// Layout V1: version(1) + revision(1) + board_id(20)
pub fn decode_info(data: &[u8], version: ProtocolVersion) -> Result<BoardInfo> {
    let (fw_version, revision, id_start) = match version {
        ProtocolVersion::V2 => (parser::be_u16_at(data, 0)?, parser::be_u16_at(data, 2)?, 4),
        ProtocolVersion::V1 => (
            u16::from(parser::byte_at(data, 0)?),
            u16::from(parser::byte_at(data, 1)?),
            2,
        ),
    };
    let board_id = BoardId::try_from(parser::slice_at(data, id_start, BOARD_ID_LEN)?)?;

    Ok(BoardInfo {
        version: fw_version,
        revision,
        board_id,
    })
}
