// micronfc/src/protocol/responses/nfc.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::Uid;

/// Decode an NFC_GET_INFO payload (after the response header)
/// Layout: uid_len(1) + uid(uid_len)
pub fn decode_nfc_info(data: &[u8]) -> Result<Uid> {
    let len = parser::byte_at(data, 0)? as usize;
    let uid = parser::slice_at(data, 1, len)?;
    Ok(Uid::from_bytes(uid))
}
