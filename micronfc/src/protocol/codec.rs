// micronfc/src/protocol/codec.rs

use crate::Result;
use crate::types::ProtocolVersion;

use super::commands::Command;
use super::responses::Response;

/// Encode a Command into the bytes handed to the transport.
pub fn encode_command_frame(cmd: &Command) -> Vec<u8> {
    cmd.encode()
}

/// Decode one response frame read back for `cmd`.
pub fn decode_response_frame(
    cmd: &Command,
    version: ProtocolVersion,
    frame: &[u8],
) -> Result<Response> {
    Response::decode(cmd, version, frame)
}
