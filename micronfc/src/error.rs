// micronfc/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The echoed opcode differs from the request. The session is out of
    /// sync and the transport should be reopened.
    #[error("opcode mismatch: expected {expected:#04x}, got {actual:#04x}")]
    OpcodeMismatch { expected: u8, actual: u8 },

    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),

    #[error("device reported error code {0:#04x}")]
    DeviceError(u8),

    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("unsupported text encoding code {0}")]
    UnsupportedEncoding(u16),

    #[error("smart poster nesting exceeds limit of {limit}")]
    RecursionLimitExceeded { limit: usize },

    #[error("invalid record range: start={start}, count={count}")]
    InvalidRecordRange { start: u16, count: u16 },

    #[error("invalid text payload: {0}")]
    InvalidText(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("operation timed out")]
    Timeout,

    // USB 実装は optional dependency
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[cfg(not(feature = "usb"))]
    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
