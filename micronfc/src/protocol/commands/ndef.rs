// micronfc/src/protocol/commands/ndef.rs

use crate::protocol::Frame;
use crate::types::Opcode;

/// Encode NFC_GET_MESSAGE_INFO (no arguments)
pub fn encode_message_info() -> Vec<u8> {
    Frame::encode(Opcode::NfcGetMessageInfo, &[])
}

/// Encode NFC_GET_RECORD_INFO
/// Layout: record(2, BE)
pub fn encode_record_info(record: u16) -> Vec<u8> {
    Frame::encode(Opcode::NfcGetRecordInfo, &record.to_be_bytes())
}

/// Encode NFC_GET_RECORD_DATA
/// Layout: record(2, BE) + item(1) + offset(2, BE) + length(2, BE)
pub fn encode_record_data(record: u16, item: u8, offset: u16, length: u16) -> Vec<u8> {
    let mut args = Vec::with_capacity(7);
    args.extend_from_slice(&record.to_be_bytes());
    args.push(item);
    args.extend_from_slice(&offset.to_be_bytes());
    args.extend_from_slice(&length.to_be_bytes());
    Frame::encode(Opcode::NfcGetRecordData, &args)
}
