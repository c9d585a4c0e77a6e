// micronfc/src/protocol/commands/nfc.rs

use crate::protocol::Frame;
use crate::types::Opcode;

/// Encode NFC_POLL with the enable flag
pub fn encode_nfc_poll(enable: bool) -> Vec<u8> {
    Frame::encode(Opcode::NfcPoll, &[enable as u8])
}

/// Encode NFC_GET_INFO (no arguments)
pub fn encode_nfc_get_info() -> Vec<u8> {
    Frame::encode(Opcode::NfcGetInfo, &[])
}
