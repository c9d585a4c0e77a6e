#[path = "../common/mod.rs"]
mod common;

use micronfc::Error;
use micronfc::ndef::{NdefRecord, resolve_records};
use micronfc::test_support::{Fault, SimulatedBoard, WireRecord};
use micronfc::types::RecordType;

#[test]
fn sample_message_resolves_in_order() {
    let expected = common::fixtures::sample_message();
    let mut board = common::helpers::open_simulated(SimulatedBoard::with_message(&expected));

    let records = board.read_message().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], NdefRecord::uri("http://a"));
    assert_eq!(records[1].record_type(), RecordType::SmartPoster);
    assert_eq!(records[1].children(), &[NdefRecord::text("hi", "en")]);
    assert_eq!(records[2], NdefRecord::mime("text/plain", b"x".to_vec()));
    assert_eq!(records, expected);
}

#[test]
fn demo_poster_round_trips_through_board() {
    let expected = common::fixtures::demo_poster();
    let mut board = common::helpers::open_simulated(SimulatedBoard::with_message(&expected));
    let records = board.read_message().unwrap();
    assert_eq!(records, expected);
    assert_eq!(
        records[0].to_string(),
        "Smart Poster [URI: http://www.micronfcboard.com/, Text [en]: MicroNFCBoard]"
    );
}

#[test]
fn unknown_records_are_skipped() {
    let sim = SimulatedBoard::with_wire_records(vec![WireRecord::unknown(), WireRecord::uri("u")], 2);
    let log = sim.request_log();
    let mut board = common::helpers::open_simulated(sim);

    assert_eq!(board.read_message().unwrap(), vec![NdefRecord::uri("u")]);
    // no data was fetched for the unknown record
    assert!(
        log.borrow()
            .iter()
            .filter(|r| r[0] == 0x08)
            .all(|r| r[1..3] == [0x00, 0x01])
    );
}

#[test]
fn unknown_child_is_dropped_from_poster() {
    let sim = SimulatedBoard::with_wire_records(
        vec![
            WireRecord::smart_poster(1, 2),
            WireRecord::unknown(),
            WireRecord::text("t", "de"),
        ],
        1,
    );
    let mut board = common::helpers::open_simulated(sim);
    assert_eq!(
        board.read_message().unwrap(),
        vec![NdefRecord::smart_poster(vec![NdefRecord::text("t", "de")])]
    );
}

#[test]
fn utf16_text_without_bom_reads_little_endian() {
    let sim = SimulatedBoard::with_wire_records(
        vec![
            WireRecord::text_encoded(1, &[b'h', 0x00, b'i', 0x00], "en"),
            WireRecord::text_utf16("héllo", "fr"),
        ],
        2,
    );
    let mut board = common::helpers::open_simulated(sim);
    assert_eq!(
        board.read_message().unwrap(),
        vec![NdefRecord::text("hi", "en"), NdefRecord::text("héllo", "fr")]
    );
}

#[test]
fn self_referential_poster_hits_recursion_limit() {
    let sim = SimulatedBoard::with_wire_records(vec![WireRecord::smart_poster(0, 1)], 1);
    let mut board = common::helpers::open_simulated(sim);
    let limit = board.config().max_record_depth;

    match board.read_message() {
        Err(Error::RecursionLimitExceeded { limit: l }) => assert_eq!(l, limit),
        other => panic!("expected RecursionLimitExceeded, got {:?}", other),
    }
}

#[test]
fn device_error_anywhere_aborts_the_read() {
    let message = common::fixtures::sample_message();
    let total = {
        let sim = SimulatedBoard::with_message(&message);
        let log = sim.request_log();
        let mut board = common::helpers::open_simulated(sim);
        board.read_message().unwrap();
        let n = log.borrow().len();
        n
    };

    // every request after INFO
    for at in 1..total {
        let sim = SimulatedBoard::with_message(&message).fail_at(at, Fault::DeviceError(0x7F));
        let mut board = common::helpers::open_simulated(sim);
        match board.read_message() {
            Err(Error::DeviceError(0x7F)) => {}
            other => panic!("request {}: expected DeviceError, got {:?}", at, other),
        }
    }
}

#[test]
fn corrupted_record_info_opcode_aborts() {
    // INFO, MESSAGE_INFO, then RECORD_INFO for record 0
    let sim = SimulatedBoard::with_message(&common::fixtures::sample_message())
        .fail_at(2, Fault::WrongOpcode);
    let mut board = common::helpers::open_simulated(sim);
    match board.read_message() {
        Err(Error::OpcodeMismatch {
            expected: 0x07,
            actual: 0x08,
        }) => {}
        other => panic!("expected OpcodeMismatch, got {:?}", other),
    }
}

#[test]
fn resolve_records_reads_a_sub_range() {
    let mut board = common::helpers::open_simulated(SimulatedBoard::with_message(
        &common::fixtures::sample_message(),
    ));
    // the poster's child lives after the three top-level records
    assert_eq!(
        resolve_records(&mut board, 3, 1).unwrap(),
        vec![NdefRecord::text("hi", "en")]
    );
    assert!(resolve_records(&mut board, 0, 0).unwrap().is_empty());
}
