#[path = "../common/mod.rs"]
mod common;

use micronfc::Error;
use micronfc::test_support::{Fault, SimulatedBoard};

#[test]
fn corrupted_opcode_is_mismatch() {
    // request 0 is INFO on open, request 1 the status query
    let sim = SimulatedBoard::new().fail_at(1, Fault::WrongOpcode);
    let mut board = common::helpers::open_simulated(sim);

    match board.status() {
        Err(Error::OpcodeMismatch {
            expected: 0x00,
            actual: 0x01,
        }) => {}
        other => panic!("expected OpcodeMismatch, got {:?}", other),
    }
}

#[test]
fn device_error_carries_status_code() {
    let sim = SimulatedBoard::new().fail_at(1, Fault::DeviceError(0x42));
    let mut board = common::helpers::open_simulated(sim);
    assert!(matches!(board.nfc_info(), Err(Error::DeviceError(0x42))));
}

#[test]
fn truncated_status_is_short_read() {
    let sim = SimulatedBoard::new().fail_at(1, Fault::Truncate);
    let mut board = common::helpers::open_simulated(sim);
    match board.status() {
        Err(Error::ShortRead {
            expected: 4,
            actual: 3,
        }) => {}
        other => panic!("expected ShortRead, got {:?}", other),
    }
}

#[test]
fn open_surfaces_info_failure() {
    let sim = SimulatedBoard::new().fail_at(0, Fault::DeviceError(0x01));
    let res = micronfc::test_support::opened_simulated_board(sim, Default::default());
    assert!(matches!(res, Err(Error::DeviceError(0x01))));
}

#[test]
fn missing_record_is_device_error() {
    let mut board = common::helpers::open_simulated(SimulatedBoard::new());
    assert!(matches!(
        board.record_info(5),
        Err(Error::DeviceError(micronfc::test_support::SIM_ERR_NO_RECORD))
    ));
}
