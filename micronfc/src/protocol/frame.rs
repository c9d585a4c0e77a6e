// micronfc/src/protocol/frame.rs

use crate::constants::{RESPONSE_HEADER_LEN, STATUS_OK};
use crate::protocol::parser;
use crate::types::Opcode;
use crate::{Error, Result};

/// Board frame helper. Delimiting frames on the wire is the transport's
/// job; a frame here is one complete request or response.
///
/// Request:  [Opcode(1)] [Args(n)]
/// Response: [Opcode(1)] [Status(1)] [Payload(n)]
pub struct Frame;

impl Frame {
    /// Build a request frame from an opcode and its fixed-layout arguments.
    pub fn encode(opcode: Opcode, args: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + args.len());
        out.push(opcode.as_u8());
        out.extend_from_slice(args);
        out
    }

    /// Validate a response frame header and return the opcode-specific
    /// payload. The echoed opcode is checked before anything else so a
    /// desynchronised frame is never interpreted further.
    pub fn decode(expected: Opcode, frame: &[u8]) -> Result<&[u8]> {
        parser::expect_opcode(frame, expected.as_u8())?;

        let status = parser::byte_at(frame, 1)?;
        if status != STATUS_OK {
            return Err(Error::DeviceError(status));
        }

        Ok(&frame[RESPONSE_HEADER_LEN..])
    }
}
