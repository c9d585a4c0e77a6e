#[path = "../common/mod.rs"]
mod common;

use micronfc::constants::{STATUS_CONNECTED, STATUS_NDEF_PRESENT, STATUS_POLLING};
use micronfc::test_support::SimulatedBoard;
use micronfc::types::{ProtocolVersion, Role, TagType};

#[test]
fn polling_round_trip_through_status() {
    let mut board = common::helpers::open_simulated(SimulatedBoard::new());

    assert!(!board.status().unwrap().polling);
    board.start_polling().unwrap();
    assert!(board.status().unwrap().polling);
    board.stop_polling().unwrap();
    assert!(!board.status().unwrap().polling);
}

#[test]
fn connected_type2_tag_as_target() {
    let bits = STATUS_CONNECTED | STATUS_NDEF_PRESENT | (2 << 8);
    let mut board = common::helpers::open_simulated(SimulatedBoard::new().status_bits(bits));

    let s = board.status().unwrap();
    assert!(s.connected && s.ndef_present && !s.polling);
    assert_eq!(s.tag_type, Some(TagType::Type2));
    assert_eq!(s.role, Some(Role::Target));
}

#[test]
fn legacy_status_drops_extended_bits() {
    let sim = SimulatedBoard::new()
        .protocol_version(ProtocolVersion::V1)
        .status_bits(STATUS_POLLING | STATUS_NDEF_PRESENT);
    let mut board = common::helpers::open_simulated(sim);

    let s = board.status().unwrap();
    assert!(s.polling && s.ndef_present && !s.connected);
    assert_eq!(s.tag_type, None);
    assert_eq!(s.role, None);
}

#[test]
fn nfc_info_reports_uid() {
    let uid = common::fixtures::sample_uid_bytes();
    let mut board = common::helpers::open_simulated(SimulatedBoard::new().uid(&uid));
    let got = board.nfc_info().unwrap();
    assert_eq!(got.as_bytes(), &uid);
    assert_eq!(got.to_hex(), "045A2B3C4D8081");
}

#[test]
fn leds_are_forwarded() {
    let sim = SimulatedBoard::new();
    let log = sim.request_log();
    let mut board = common::helpers::open_simulated(sim);

    board.set_leds(false, true).unwrap();
    assert_eq!(log.borrow().last().unwrap(), &vec![0x03, 0x00, 0x01]);
}
