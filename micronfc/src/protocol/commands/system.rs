// micronfc/src/protocol/commands/system.rs

use crate::protocol::Frame;
use crate::types::Opcode;

/// Encode GET_STATUS (no arguments)
pub fn encode_get_status() -> Vec<u8> {
    Frame::encode(Opcode::GetStatus, &[])
}

/// Encode INFO (no arguments)
pub fn encode_info() -> Vec<u8> {
    Frame::encode(Opcode::Info, &[])
}

/// Encode RESET. `isp` reboots the board into its bootloader.
pub fn encode_reset(isp: bool) -> Vec<u8> {
    Frame::encode(Opcode::Reset, &[isp as u8])
}

/// Encode LEDS: one flag byte per LED
pub fn encode_leds(led1: bool, led2: bool) -> Vec<u8> {
    Frame::encode(Opcode::Leds, &[led1 as u8, led2 as u8])
}
