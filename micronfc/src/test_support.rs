//! Test support helpers intended for use by unit tests, integration tests,
//! benches and the demo.
//!
//! `SimulatedBoard` answers every opcode from in-memory state so record
//! reconstruction can be exercised end to end without hardware. The mock
//! helpers centralize scripted-response setup.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{BOARD_ID_LEN, STATUS_POLLING};
use crate::device::{Board, BoardConfig, Opened};
use crate::ndef::NdefRecord;
use crate::transport::{MockTransport, Transport};
use crate::types::{Opcode, ProtocolVersion, RecordType, TextEncoding};
use crate::{Error, Result};

/// Status code the simulated board returns for a record index it does
/// not hold.
pub const SIM_ERR_NO_RECORD: u8 = 0x02;
/// Status code for a data request outside the item bounds.
pub const SIM_ERR_OUT_OF_RANGE: u8 = 0x03;
/// Status code for a request frame the simulation cannot parse.
pub const SIM_ERR_MALFORMED: u8 = 0x04;

/// One record as the board's firmware exposes it: a type code, the
/// descriptor fields and the addressable items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRecord {
    pub type_code: u16,
    pub fields: Vec<u16>,
    pub items: Vec<Vec<u8>>,
}

impl WireRecord {
    pub fn unknown() -> Self {
        Self {
            type_code: RecordType::Unknown.code(),
            fields: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn uri(uri: &str) -> Self {
        Self {
            type_code: RecordType::Uri.code(),
            fields: vec![uri.len() as u16],
            items: vec![uri.as_bytes().to_vec()],
        }
    }

    pub fn text(text: &str, language_code: &str) -> Self {
        Self::text_encoded(TextEncoding::Utf8 as u16, text.as_bytes(), language_code)
    }

    /// Text record with a BOM-less little-endian UTF-16 body
    pub fn text_utf16(text: &str, language_code: &str) -> Self {
        let body: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        Self::text_encoded(TextEncoding::Utf16 as u16, &body, language_code)
    }

    /// Text record with an arbitrary encoding code and raw body
    pub fn text_encoded(encoding: u16, body: &[u8], language_code: &str) -> Self {
        Self {
            type_code: RecordType::Text.code(),
            fields: vec![encoding, language_code.len() as u16, body.len() as u16],
            items: vec![language_code.as_bytes().to_vec(), body.to_vec()],
        }
    }

    pub fn smart_poster(child_start: u16, child_count: u16) -> Self {
        Self {
            type_code: RecordType::SmartPoster.code(),
            fields: vec![child_start, child_count],
            items: Vec::new(),
        }
    }

    pub fn mime(mime_type: &str, data: &[u8]) -> Self {
        Self {
            type_code: RecordType::Mime.code(),
            fields: vec![mime_type.len() as u16, data.len() as u16],
            items: vec![mime_type.as_bytes().to_vec(), data.to_vec()],
        }
    }
}

/// Flatten a record tree into the firmware's table layout: top-level
/// records first, smart poster children appended after them.
pub fn flatten_message(records: &[NdefRecord]) -> Vec<WireRecord> {
    let mut table = vec![WireRecord::unknown(); records.len()];
    place_records(&mut table, 0, records);
    table
}

fn place_records(table: &mut Vec<WireRecord>, start: usize, records: &[NdefRecord]) {
    for (i, record) in records.iter().enumerate() {
        let wire = match record {
            NdefRecord::Uri { uri } => WireRecord::uri(uri),
            NdefRecord::Text {
                text,
                language_code,
            } => WireRecord::text(text, language_code),
            NdefRecord::Mime { mime_type, data } => WireRecord::mime(mime_type, data),
            NdefRecord::SmartPoster { children } => {
                let child_start = table.len();
                table.extend(std::iter::repeat_n(WireRecord::unknown(), children.len()));
                place_records(table, child_start, children);
                WireRecord::smart_poster(child_start as u16, children.len() as u16)
            }
        };
        table[start + i] = wire;
    }
}

/// Fault injected into the response to a given request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Answer with this non-zero status byte
    DeviceError(u8),
    /// Echo a different opcode
    WrongOpcode,
    /// Drop the last byte of the response
    Truncate,
}

/// In-memory board. Implements `Transport` by decoding each request and
/// preparing the matching response for the next `receive`.
#[derive(Debug)]
pub struct SimulatedBoard {
    pub version: ProtocolVersion,
    pub status: u32,
    pub firmware: (u16, u16),
    pub board_id: [u8; BOARD_ID_LEN],
    pub uid: Vec<u8>,
    pub records: Vec<WireRecord>,
    pub message_len: u16,
    pub leds: (bool, bool),
    faults: Vec<(usize, Fault)>,
    pending: Option<Vec<u8>>,
    requests: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl Default for SimulatedBoard {
    fn default() -> Self {
        Self {
            version: ProtocolVersion::V2,
            status: 0,
            firmware: (1, 2),
            board_id: [0u8; BOARD_ID_LEN],
            uid: Vec::new(),
            records: Vec::new(),
            message_len: 0,
            leds: (false, false),
            faults: Vec::new(),
            pending: None,
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl SimulatedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board holding `records` as its current NDEF message.
    pub fn with_message(records: &[NdefRecord]) -> Self {
        Self::with_wire_records(flatten_message(records), records.len() as u16)
    }

    /// Board holding a raw record table whose first `message_len` entries
    /// form the top level of the message.
    pub fn with_wire_records(records: Vec<WireRecord>, message_len: u16) -> Self {
        Self {
            records,
            message_len,
            ..Self::default()
        }
    }

    pub fn protocol_version(mut self, version: ProtocolVersion) -> Self {
        self.version = version;
        self
    }

    pub fn status_bits(mut self, status: u32) -> Self {
        self.status = status;
        self
    }

    pub fn uid(mut self, uid: &[u8]) -> Self {
        self.uid = uid.to_vec();
        self
    }

    pub fn board_id(mut self, id: [u8; BOARD_ID_LEN]) -> Self {
        self.board_id = id;
        self
    }

    /// Inject a fault into the response to the `request`-th request
    /// (zero-based, counting every frame sent including INFO on open).
    pub fn fail_at(mut self, request: usize, fault: Fault) -> Self {
        self.faults.push((request, fault));
        self
    }

    /// Shared handle to the request log; stays valid after the board is
    /// moved into a `Board`.
    pub fn request_log(&self) -> Rc<RefCell<Vec<Vec<u8>>>> {
        self.requests.clone()
    }

    fn respond(&mut self, request: &[u8]) -> Option<Vec<u8>> {
        let Some((&code, args)) = request.split_first() else {
            return Some(vec![0xFF, SIM_ERR_MALFORMED]);
        };
        let Ok(opcode) = Opcode::try_from(code) else {
            return Some(vec![code, SIM_ERR_MALFORMED]);
        };

        let mut out = vec![code, 0x00];
        match opcode {
            Opcode::GetStatus => match self.version {
                ProtocolVersion::V2 => out.extend_from_slice(&self.status.to_be_bytes()),
                ProtocolVersion::V1 => out.push(self.status as u8),
            },
            Opcode::Info => {
                let (version, revision) = self.firmware;
                match self.version {
                    ProtocolVersion::V2 => {
                        out.extend_from_slice(&version.to_be_bytes());
                        out.extend_from_slice(&revision.to_be_bytes());
                    }
                    ProtocolVersion::V1 => {
                        out.push(version as u8);
                        out.push(revision as u8);
                    }
                }
                out.extend_from_slice(&self.board_id);
            }
            Opcode::Reset => return None,
            Opcode::Leds => match args {
                [led1, led2, ..] => self.leds = (*led1 != 0, *led2 != 0),
                _ => out[1] = SIM_ERR_MALFORMED,
            },
            Opcode::NfcPoll => match args.first() {
                Some(0) => self.status &= !STATUS_POLLING,
                Some(_) => self.status |= STATUS_POLLING,
                None => out[1] = SIM_ERR_MALFORMED,
            },
            Opcode::NfcGetInfo => {
                out.push(self.uid.len() as u8);
                out.extend_from_slice(&self.uid);
            }
            Opcode::NfcGetMessageInfo => out.extend_from_slice(&self.message_len.to_be_bytes()),
            Opcode::NfcGetRecordInfo => match args {
                [hi, lo, ..] => match self.records.get(u16::from_be_bytes([*hi, *lo]) as usize) {
                    Some(record) => {
                        out.extend_from_slice(&record.type_code.to_be_bytes());
                        for field in &record.fields {
                            out.extend_from_slice(&field.to_be_bytes());
                        }
                    }
                    None => out[1] = SIM_ERR_NO_RECORD,
                },
                _ => out[1] = SIM_ERR_MALFORMED,
            },
            Opcode::NfcGetRecordData => match args {
                [r_hi, r_lo, item, o_hi, o_lo, l_hi, l_lo, ..] => {
                    let record = u16::from_be_bytes([*r_hi, *r_lo]) as usize;
                    let offset = u16::from_be_bytes([*o_hi, *o_lo]) as usize;
                    let length = u16::from_be_bytes([*l_hi, *l_lo]) as usize;
                    let slice = self
                        .records
                        .get(record)
                        .and_then(|r| r.items.get(*item as usize))
                        .and_then(|bytes| bytes.get(offset..offset + length));
                    match slice {
                        Some(bytes) => out.extend_from_slice(bytes),
                        None => out[1] = SIM_ERR_OUT_OF_RANGE,
                    }
                }
                _ => out[1] = SIM_ERR_MALFORMED,
            },
        }
        Some(out)
    }
}

impl Transport for SimulatedBoard {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let index = {
            let mut log = self.requests.borrow_mut();
            log.push(data.to_vec());
            log.len() - 1
        };

        let mut response = self.respond(data);
        if let (Some(resp), Some((_, fault))) = (
            response.as_mut(),
            self.faults.iter().find(|(at, _)| *at == index),
        ) {
            match fault {
                Fault::DeviceError(code) => {
                    resp.truncate(2);
                    resp[1] = *code;
                }
                Fault::WrongOpcode => resp[0] = resp[0].wrapping_add(1),
                Fault::Truncate => {
                    resp.pop();
                }
            }
        }
        self.pending = response;
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        self.pending.take().ok_or(Error::Timeout)
    }
}

/// INFO response frame for the given protocol version
#[doc(hidden)]
pub fn info_frame(version: ProtocolVersion) -> Vec<u8> {
    let mut frame = vec![Opcode::Info.as_u8(), 0x00];
    match version {
        ProtocolVersion::V2 => frame.extend_from_slice(&[0x00, 0x01, 0x00, 0x02]),
        ProtocolVersion::V1 => frame.extend_from_slice(&[0x01, 0x02]),
    }
    frame.extend_from_slice(&[0u8; BOARD_ID_LEN]);
    frame
}

/// Build a MockTransport pre-seeded with the given response frames and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    Box::new(MockTransport::with_responses(responses))
}

/// Convenience: open a V2 Board backed by a MockTransport. The INFO frame
/// consumed by `open` is seeded first, then `responses`.
#[doc(hidden)]
pub fn opened_mock_board(responses: Vec<Vec<u8>>) -> Result<Board<Opened>> {
    let mut all = vec![info_frame(ProtocolVersion::V2)];
    all.extend(responses);
    Board::new_with_transport(boxed_mock_with_responses(all)).open()
}

/// Open a Board over a SimulatedBoard with the given configuration. The
/// configuration's protocol version is forced to match the simulation.
#[doc(hidden)]
pub fn opened_simulated_board(sim: SimulatedBoard, config: BoardConfig) -> Result<Board<Opened>> {
    let config = BoardConfig {
        protocol_version: sim.version,
        ..config
    };
    Board::with_config(Box::new(sim), config).open()
}
