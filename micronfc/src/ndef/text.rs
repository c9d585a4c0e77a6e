//! Text decoding for record items

use crate::types::TextEncoding;
use crate::{Error, Result};

pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::InvalidText(e.to_string()))
}

/// UTF-16 honours a leading BOM; without one the bytes are little-endian,
/// the byte order the board's host tooling writes.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidText(format!(
            "utf-16 payload has odd length {}",
            bytes.len()
        )));
    }

    let (little_endian, body) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            if little_endian {
                u16::from_le_bytes([c[0], c[1]])
            } else {
                u16::from_be_bytes([c[0], c[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|e| Error::InvalidText(e.to_string()))
}

pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => decode_utf8(bytes),
        TextEncoding::Utf16 => decode_utf16(bytes),
    }
}
