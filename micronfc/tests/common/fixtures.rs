// fixtures.rs: commonly used test frames and messages

use micronfc::constants::BOARD_ID_LEN;
use micronfc::ndef::NdefRecord;

pub fn sample_board_id_bytes() -> [u8; BOARD_ID_LEN] {
    let mut id = [0u8; BOARD_ID_LEN];
    for (i, b) in id.iter_mut().enumerate() {
        *b = 0xA0 + i as u8;
    }
    id
}

pub fn sample_uid_bytes() -> [u8; 7] {
    [0x04, 0x5A, 0x2B, 0x3C, 0x4D, 0x80, 0x81]
}

/// INFO frame in the current layout: version 1.2
pub fn info_frame_v2() -> Vec<u8> {
    let mut frame = vec![0x01, 0x00, 0x00, 0x01, 0x00, 0x02];
    frame.extend_from_slice(&sample_board_id_bytes());
    frame
}

/// INFO frame in the legacy layout: version 1.2 as single bytes
pub fn info_frame_v1() -> Vec<u8> {
    let mut frame = vec![0x01, 0x00, 0x01, 0x02];
    frame.extend_from_slice(&sample_board_id_bytes());
    frame
}

pub fn status_frame_v2(bits: u32) -> Vec<u8> {
    let mut frame = vec![0x00, 0x00];
    frame.extend_from_slice(&bits.to_be_bytes());
    frame
}

/// URI, a smart poster holding one text record, then a MIME record
pub fn sample_message() -> Vec<NdefRecord> {
    vec![
        NdefRecord::uri("http://a"),
        NdefRecord::smart_poster(vec![NdefRecord::text("hi", "en")]),
        NdefRecord::mime("text/plain", b"x".to_vec()),
    ]
}

/// Smart poster in the layout the board's own demo tag uses
pub fn demo_poster() -> Vec<NdefRecord> {
    vec![NdefRecord::smart_poster(vec![
        NdefRecord::uri("http://www.micronfcboard.com/"),
        NdefRecord::text("MicroNFCBoard", "en"),
    ])]
}
