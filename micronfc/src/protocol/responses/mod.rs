// micronfc/src/protocol/responses/mod.rs

pub mod info;
pub mod ndef;
pub mod nfc;
pub mod status;

pub use info::decode_info;
pub use ndef::{decode_message_info, decode_record_data, decode_record_info};
pub use nfc::decode_nfc_info;
pub use status::decode_status;

use crate::protocol::{Command, Frame};
use crate::types::{BoardInfo, Opcode, ProtocolVersion, RecordDescriptor, StatusFlags, Uid};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Status(StatusFlags),
    Info(BoardInfo),
    Reset,
    Leds,
    NfcPoll,
    NfcInfo(Uid),
    MessageInfo { record_count: u16 },
    RecordInfo(RecordDescriptor),
    RecordData(Vec<u8>),
}

impl Response {
    /// Decode a full response frame for the command that was just sent.
    /// The echoed opcode and the status byte are validated before any
    /// opcode-specific byte is read.
    pub fn decode(cmd: &Command, version: ProtocolVersion, frame: &[u8]) -> crate::Result<Self> {
        let data = Frame::decode(cmd.opcode(), frame)?;

        match *cmd {
            Command::GetStatus => Ok(Self::Status(decode_status(data, version)?)),
            Command::Info => Ok(Self::Info(decode_info(data, version)?)),
            Command::Reset { .. } => Ok(Self::Reset),
            Command::Leds { .. } => Ok(Self::Leds),
            Command::NfcPoll { .. } => Ok(Self::NfcPoll),
            Command::NfcGetInfo => Ok(Self::NfcInfo(decode_nfc_info(data)?)),
            Command::NfcGetMessageInfo => Ok(Self::MessageInfo {
                record_count: decode_message_info(data)?,
            }),
            Command::NfcGetRecordInfo { .. } => Ok(Self::RecordInfo(decode_record_info(data)?)),
            Command::NfcGetRecordData { length, .. } => {
                Ok(Self::RecordData(decode_record_data(data, length)?))
            }
        }
    }

    /// Return the opcode associated with this response variant. Useful for
    /// surfacing `OpcodeMismatch` at higher layers without re-decoding.
    pub fn opcode(&self) -> Opcode {
        match self {
            Response::Status(_) => Opcode::GetStatus,
            Response::Info(_) => Opcode::Info,
            Response::Reset => Opcode::Reset,
            Response::Leds => Opcode::Leds,
            Response::NfcPoll => Opcode::NfcPoll,
            Response::NfcInfo(_) => Opcode::NfcGetInfo,
            Response::MessageInfo { .. } => Opcode::NfcGetMessageInfo,
            Response::RecordInfo(_) => Opcode::NfcGetRecordInfo,
            Response::RecordData(_) => Opcode::NfcGetRecordData,
        }
    }
}
