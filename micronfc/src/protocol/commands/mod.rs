// micronfc/src/protocol/commands/mod.rs

pub mod ndef;
pub mod nfc;
pub mod system;

pub use ndef::{encode_message_info, encode_record_data, encode_record_info};
pub use nfc::{encode_nfc_get_info, encode_nfc_poll};
pub use system::{encode_get_status, encode_info, encode_leds, encode_reset};

use crate::types::Opcode;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GetStatus,
    Info,
    Reset {
        isp: bool,
    },
    Leds {
        led1: bool,
        led2: bool,
    },
    NfcPoll {
        enable: bool,
    },
    NfcGetInfo,
    NfcGetMessageInfo,
    NfcGetRecordInfo {
        record: u16,
    },
    NfcGetRecordData {
        record: u16,
        item: u8,
        offset: u16,
        length: u16,
    },
}

impl Command {
    /// Wire opcode the response must echo.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::GetStatus => Opcode::GetStatus,
            Self::Info => Opcode::Info,
            Self::Reset { .. } => Opcode::Reset,
            Self::Leds { .. } => Opcode::Leds,
            Self::NfcPoll { .. } => Opcode::NfcPoll,
            Self::NfcGetInfo => Opcode::NfcGetInfo,
            Self::NfcGetMessageInfo => Opcode::NfcGetMessageInfo,
            Self::NfcGetRecordInfo { .. } => Opcode::NfcGetRecordInfo,
            Self::NfcGetRecordData { .. } => Opcode::NfcGetRecordData,
        }
    }

    /// Encode the command into the request frame (opcode + args).
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Self::GetStatus => encode_get_status(),
            Self::Info => encode_info(),
            Self::Reset { isp } => encode_reset(isp),
            Self::Leds { led1, led2 } => encode_leds(led1, led2),
            Self::NfcPoll { enable } => encode_nfc_poll(enable),
            Self::NfcGetInfo => encode_nfc_get_info(),
            Self::NfcGetMessageInfo => encode_message_info(),
            Self::NfcGetRecordInfo { record } => encode_record_info(record),
            Self::NfcGetRecordData {
                record,
                item,
                offset,
                length,
            } => encode_record_data(record, item, offset, length),
        }
    }

    /// Whether the board answers this command. RESET reboots the board
    /// before it can reply.
    pub fn expects_response(&self) -> bool {
        !matches!(self, Self::Reset { .. })
    }
}
