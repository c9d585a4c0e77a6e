// micronfc/src/types.rs

use crate::Error;
use crate::constants::{
    BOARD_ID_LEN, STATUS_CONNECTED, STATUS_INITIATOR, STATUS_NDEF_PRESENT, STATUS_POLLING,
    STATUS_TAG_TYPE_MASK, STATUS_TAG_TYPE_SHIFT,
};
use derive_more::Display;
use std::convert::TryFrom;
use std::str::FromStr;

/// Wire opcodes. Every response echoes the opcode of its request.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Opcode {
    #[display(fmt = "GET_STATUS")]
    GetStatus = 0x00,
    #[display(fmt = "INFO")]
    Info = 0x01,
    #[display(fmt = "RESET")]
    Reset = 0x02,
    #[display(fmt = "LEDS")]
    Leds = 0x03,
    #[display(fmt = "NFC_POLL")]
    NfcPoll = 0x04,
    #[display(fmt = "NFC_GET_INFO")]
    NfcGetInfo = 0x05,
    #[display(fmt = "NFC_GET_MESSAGE_INFO")]
    NfcGetMessageInfo = 0x06,
    #[display(fmt = "NFC_GET_RECORD_INFO")]
    NfcGetRecordInfo = 0x07,
    #[display(fmt = "NFC_GET_RECORD_DATA")]
    NfcGetRecordData = 0x08,
}

impl Opcode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

}

impl TryFrom<u8> for Opcode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::GetStatus),
            0x01 => Ok(Self::Info),
            0x02 => Ok(Self::Reset),
            0x03 => Ok(Self::Leds),
            0x04 => Ok(Self::NfcPoll),
            0x05 => Ok(Self::NfcGetInfo),
            0x06 => Ok(Self::NfcGetMessageInfo),
            0x07 => Ok(Self::NfcGetRecordInfo),
            0x08 => Ok(Self::NfcGetRecordData),
            other => Err(Error::UnknownOpcode(other)),
        }
    }
}

/// Firmware protocol generation spoken by the board.
///
/// `V2` is the current firmware (4-byte status bitfield with tag type and
/// role, 16-bit version/revision in INFO). `V1` is the legacy profile with
/// a single status byte and 8-bit version/revision. Both share the opcode
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolVersion {
    #[display(fmt = "v1")]
    V1,
    #[default]
    #[display(fmt = "v2")]
    V2,
}

/// NFC Forum tag type reported while connected (V2 only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    #[display(fmt = "type 1")]
    Type1,
    #[display(fmt = "type 2")]
    Type2,
    #[display(fmt = "type 3")]
    Type3,
    #[display(fmt = "type 4")]
    Type4,
}

impl TagType {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Type1),
            2 => Some(Self::Type2),
            3 => Some(Self::Type3),
            4 => Some(Self::Type4),
            _ => None,
        }
    }
}

/// Role of the board in the current NFC link (V2 only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[display(fmt = "initiator")]
    Initiator,
    #[display(fmt = "target")]
    Target,
}

/// Decoded GET_STATUS bitfield. Never cached; every status query decodes
/// a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFlags {
    pub polling: bool,
    pub connected: bool,
    pub ndef_present: bool,
    pub tag_type: Option<TagType>,
    pub role: Option<Role>,
    raw: u32,
}

impl StatusFlags {
    /// Decode a raw bitfield according to the protocol version. V1 only
    /// carries the three low flag bits.
    pub fn from_bits(raw: u32, version: ProtocolVersion) -> Self {
        let (tag_type, role) = match version {
            ProtocolVersion::V1 => (None, None),
            ProtocolVersion::V2 => {
                let code = (raw >> STATUS_TAG_TYPE_SHIFT) & STATUS_TAG_TYPE_MASK;
                let role = if raw & STATUS_INITIATOR != 0 {
                    Role::Initiator
                } else {
                    Role::Target
                };
                (TagType::from_code(code), Some(role))
            }
        };

        Self {
            polling: raw & STATUS_POLLING != 0,
            connected: raw & STATUS_CONNECTED != 0,
            ndef_present: raw & STATUS_NDEF_PRESENT != 0,
            tag_type,
            role,
            raw,
        }
    }

    pub fn raw(&self) -> u32 {
        self.raw
    }
}

/// Board identifier (20 bytes) reported by INFO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardId([u8; BOARD_ID_LEN]);

impl BoardId {
    pub fn from_bytes(bytes: [u8; BOARD_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BOARD_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BoardId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BOARD_ID_LEN {
            return Err(Error::ShortRead {
                expected: BOARD_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BOARD_ID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Firmware version/revision and board identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardInfo {
    pub version: u16,
    pub revision: u16,
    pub board_id: BoardId,
}

/// Tag UID - Newtype Pattern (可変長)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::parse_hex(s)
            .map(Self)
            .map_err(Error::InvalidText)
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Record type code returned by NFC_GET_RECORD_INFO
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    #[display(fmt = "unknown")]
    Unknown = 0,
    #[display(fmt = "uri")]
    Uri = 1,
    #[display(fmt = "text")]
    Text = 2,
    #[display(fmt = "smart poster")]
    SmartPoster = 3,
    #[display(fmt = "mime")]
    Mime = 4,
}

impl RecordType {
    /// Codes the firmware does not know about collapse into `Unknown`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Uri,
            2 => Self::Text,
            3 => Self::SmartPoster,
            4 => Self::Mime,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Text record payload encoding
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TextEncoding {
    #[display(fmt = "utf-8")]
    Utf8 = 0,
    #[display(fmt = "utf-16")]
    Utf16 = 1,
}

impl TryFrom<u16> for TextEncoding {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Utf8),
            1 => Ok(Self::Utf16),
            other => Err(Error::UnsupportedEncoding(other)),
        }
    }
}

/// Per-record metadata. The meaning of `fields` depends on the record type:
///
/// | type | fields |
/// |---|---|
/// | Uri | uri length |
/// | Text | encoding, language code length, text length |
/// | SmartPoster | first child record, child count |
/// | Mime | mime type length, data length |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub record_type: RecordType,
    pub fields: Vec<u16>,
}

impl RecordDescriptor {
    pub fn new(record_type: RecordType, fields: Vec<u16>) -> Self {
        Self {
            record_type,
            fields,
        }
    }

    /// Field at `index`; a missing field means the device sent a short
    /// record-info response.
    pub fn field(&self, index: usize) -> Result<u16, Error> {
        self.fields.get(index).copied().ok_or(Error::ShortRead {
            expected: (index + 1) * 2,
            actual: self.fields.len() * 2,
        })
    }
}
