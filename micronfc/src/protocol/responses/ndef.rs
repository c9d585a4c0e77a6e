// micronfc/src/protocol/responses/ndef.rs

use crate::Result;
use crate::protocol::parser;
use crate::types::{RecordDescriptor, RecordType};

/// Decode an NFC_GET_MESSAGE_INFO payload (after the response header)
/// Layout: record_count(2, BE)
pub fn decode_message_info(data: &[u8]) -> Result<u16> {
    parser::be_u16_at(data, 0)
}

/// Decode an NFC_GET_RECORD_INFO payload (after the response header)
/// Layout: record_type(2, BE) + fields(N*2, BE)
pub fn decode_record_info(data: &[u8]) -> Result<RecordDescriptor> {
    let code = parser::be_u16_at(data, 0)?;
    let fields = parser::be_u16_seq_from(data, 2);
    Ok(RecordDescriptor::new(RecordType::from_code(code), fields))
}

/// Decode an NFC_GET_RECORD_DATA payload (after the response header).
/// The board must return exactly `length` bytes; anything after them is
/// report padding.
pub fn decode_record_data(data: &[u8], length: u16) -> Result<Vec<u8>> {
    Ok(parser::slice_at(data, 0, length as usize)?.to_vec())
}
