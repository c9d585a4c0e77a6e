#[path = "../common/mod.rs"]
mod common;

use micronfc::Error;
use micronfc::device::Board;
use micronfc::transport::Transport;
use micronfc::transport::mock::MockTransport;

#[test]
fn mock_replays_scripted_frames_in_order() {
    let mut m = MockTransport::with_responses(vec![vec![0x00, 0x00], vec![0x01, 0x00]]);
    m.send(&[0x00]).unwrap();
    assert_eq!(m.receive(10).unwrap(), vec![0x00, 0x00]);
    assert_eq!(m.receive(10).unwrap(), vec![0x01, 0x00]);
    assert!(matches!(m.receive(10), Err(Error::Timeout)));
}

#[test]
fn board_over_mock_reads_scripted_message() {
    let responses = vec![
        common::fixtures::info_frame_v2(),
        vec![0x06, 0x00, 0x00, 0x01],
        vec![0x07, 0x00, 0x00, 0x01, 0x00, 0x03],
        vec![0x08, 0x00, b'a', b':', b'b'],
    ];
    let mock = MockTransport::with_responses(responses);
    let mut board = Board::new_with_transport(Box::new(mock)).open().unwrap();

    let records = board.read_message().unwrap();
    assert_eq!(records, vec![micronfc::ndef::NdefRecord::uri("a:b")]);
    board.close().unwrap();
}

#[test]
fn exhausted_script_times_out_mid_read() {
    let responses = vec![
        common::fixtures::info_frame_v2(),
        vec![0x06, 0x00, 0x00, 0x01],
    ];
    let mock = MockTransport::with_responses(responses);
    let mut board = Board::new_with_transport(Box::new(mock)).open().unwrap();
    assert!(matches!(board.read_message(), Err(Error::Timeout)));
}
