// micronfc/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, trace};

use crate::device::config::BoardConfig;
use crate::ndef::NdefRecord;
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{BoardInfo, Opcode, ProtocolVersion, RecordDescriptor, StatusFlags, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state markers
pub struct Closed;
pub struct Opened;

/// Board handle that enforces the open state at compile time. The handle
/// owns the transport exclusively and keeps at most one request in flight;
/// every operation takes `&mut self`.
pub struct Board<State = Closed> {
    transport: Box<dyn Transport>,
    config: BoardConfig,
    info: Option<BoardInfo>,
    _state: PhantomData<State>,
}

impl<State> Board<State> {
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn protocol_version(&self) -> ProtocolVersion {
        self.config.protocol_version
    }
}

impl Board<Closed> {
    /// Create a Board from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, BoardConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: BoardConfig) -> Self {
        Self {
            transport,
            config,
            info: None,
            _state: PhantomData,
        }
    }

    /// Open the session: query INFO once and keep the identity for the
    /// lifetime of the handle.
    pub fn open(self) -> Result<Board<Opened>> {
        self.config.validate()?;
        let mut board = Board::<Opened> {
            transport: self.transport,
            config: self.config,
            info: None,
            _state: PhantomData,
        };

        let info = board.info()?;
        debug!(
            "opened board {} (version {}.{}, protocol {})",
            info.board_id, info.version, info.revision, board.config.protocol_version
        );
        board.info = Some(info);
        Ok(board)
    }
}

impl Board<Opened> {
    /// Execute a command: exactly one write followed by exactly one read.
    /// No retries; a malformed response is returned as an error.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        let request = codec::encode_command_frame(&cmd);
        trace!("-> {} [{}]", cmd.opcode(), bytes_to_hex_spaced(&request));
        self.transport.send(&request)?;

        if !cmd.expects_response() {
            return Ok(Response::Reset);
        }

        let raw = self.transport.receive(self.config.read_timeout_ms)?;
        trace!("<- {} [{}]", cmd.opcode(), bytes_to_hex_spaced(&raw));

        codec::decode_response_frame(&cmd, self.config.protocol_version, &raw)
    }

    /// Identity captured when the session was opened.
    pub fn board_info(&self) -> Option<&BoardInfo> {
        self.info.as_ref()
    }

    /// Query INFO again.
    pub fn info(&mut self) -> Result<BoardInfo> {
        match self.execute(Command::Info)? {
            Response::Info(info) => Ok(info),
            other => Err(mismatch(Opcode::Info, &other)),
        }
    }

    /// Read the status bitfield. Always a fresh query.
    pub fn status(&mut self) -> Result<StatusFlags> {
        match self.execute(Command::GetStatus)? {
            Response::Status(flags) => Ok(flags),
            other => Err(mismatch(Opcode::GetStatus, &other)),
        }
    }

    pub fn set_leds(&mut self, led1: bool, led2: bool) -> Result<()> {
        match self.execute(Command::Leds { led1, led2 })? {
            Response::Leds => Ok(()),
            other => Err(mismatch(Opcode::Leds, &other)),
        }
    }

    pub fn nfc_poll(&mut self, enable: bool) -> Result<()> {
        match self.execute(Command::NfcPoll { enable })? {
            Response::NfcPoll => Ok(()),
            other => Err(mismatch(Opcode::NfcPoll, &other)),
        }
    }

    pub fn start_polling(&mut self) -> Result<()> {
        self.nfc_poll(true)
    }

    pub fn stop_polling(&mut self) -> Result<()> {
        self.nfc_poll(false)
    }

    /// UID of the connected tag
    pub fn nfc_info(&mut self) -> Result<Uid> {
        match self.execute(Command::NfcGetInfo)? {
            Response::NfcInfo(uid) => Ok(uid),
            other => Err(mismatch(Opcode::NfcGetInfo, &other)),
        }
    }

    /// Number of top-level records in the current NDEF message
    pub fn message_info(&mut self) -> Result<u16> {
        match self.execute(Command::NfcGetMessageInfo)? {
            Response::MessageInfo { record_count } => Ok(record_count),
            other => Err(mismatch(Opcode::NfcGetMessageInfo, &other)),
        }
    }

    pub fn record_info(&mut self, record: u16) -> Result<RecordDescriptor> {
        match self.execute(Command::NfcGetRecordInfo { record })? {
            Response::RecordInfo(descriptor) => Ok(descriptor),
            other => Err(mismatch(Opcode::NfcGetRecordInfo, &other)),
        }
    }

    /// One bounded slice of a record item. Use `ndef::fetch_item` to read a
    /// whole item.
    pub fn record_data(&mut self, record: u16, item: u8, offset: u16, length: u16) -> Result<Vec<u8>> {
        let cmd = Command::NfcGetRecordData {
            record,
            item,
            offset,
            length,
        };
        match self.execute(cmd)? {
            Response::RecordData(bytes) => Ok(bytes),
            other => Err(mismatch(Opcode::NfcGetRecordData, &other)),
        }
    }

    /// Read and fully resolve the current NDEF message.
    pub fn read_message(&mut self) -> Result<Vec<NdefRecord>> {
        crate::ndef::read_message(self)
    }

    /// Reboot the board (into the bootloader when `isp` is set). The board
    /// drops off the bus without answering, so the session ends here.
    pub fn reset(mut self, isp: bool) -> Result<()> {
        self.execute(Command::Reset { isp })?;
        self.transport.close()
    }

    pub fn close(mut self) -> Result<()> {
        self.transport.close()
    }
}

fn mismatch(expected: Opcode, got: &Response) -> Error {
    Error::OpcodeMismatch {
        expected: expected.as_u8(),
        actual: got.opcode().as_u8(),
    }
}
