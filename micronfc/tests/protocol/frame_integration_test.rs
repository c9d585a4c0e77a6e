#[path = "../common/mod.rs"]
mod common;

use micronfc::Error;
use micronfc::protocol::Frame;
use micronfc::types::Opcode;

#[test]
fn info_frame_payload_follows_header() {
    let frame = common::fixtures::info_frame_v2();
    let payload = Frame::decode(Opcode::Info, &frame).expect("frame decode");
    assert_eq!(payload, &frame[2..]);
}

#[test]
fn opcode_is_checked_before_status() {
    // Wrong opcode and a failing status: the mismatch wins
    match Frame::decode(Opcode::NfcGetRecordInfo, &[0x08, 0x05]) {
        Err(Error::OpcodeMismatch {
            expected: 0x07,
            actual: 0x08,
        }) => {}
        other => panic!("expected OpcodeMismatch, got {:?}", other),
    }
}

#[test]
fn truncated_headers_are_short_reads() {
    assert!(matches!(
        Frame::decode(Opcode::GetStatus, &[]),
        Err(Error::ShortRead { .. })
    ));
    assert!(matches!(
        Frame::decode(Opcode::GetStatus, &[0x00]),
        Err(Error::ShortRead { .. })
    ));
}
