// micronfc/src/constants.rs
//! Common protocol constants used across the crate

/// Response header: echoed opcode(1) + status(1)
pub const RESPONSE_HEADER_LEN: usize = 2;

/// Status byte value reported by the board on success
pub const STATUS_OK: u8 = 0x00;

/// Board identifier length returned by INFO (five 32-bit words)
pub const BOARD_ID_LEN: usize = 5 * 4;

/// Status bitfield flags (bits 0..=2 are shared by both protocol versions)
pub const STATUS_POLLING: u32 = 1 << 0;
pub const STATUS_CONNECTED: u32 = 1 << 1;
pub const STATUS_NDEF_PRESENT: u32 = 1 << 2;

/// Tag type sub-field (V2 only): values 1..=4 shifted into bits 8..=10
pub const STATUS_TAG_TYPE_SHIFT: u32 = 8;
pub const STATUS_TAG_TYPE_MASK: u32 = 0x07;

/// Role flag (V2 only): set = initiator, clear = target
pub const STATUS_INITIATOR: u32 = 1 << 16;

/// Maximum payload bytes requested by a single NFC_GET_RECORD_DATA
pub const DEFAULT_CHUNK_SIZE: u16 = 40;

/// Default cap on smart poster nesting
pub const DEFAULT_MAX_RECORD_DEPTH: usize = 8;

/// HID report size used by the USB transport
pub const HID_REPORT_LEN: usize = 64;
