#[path = "../common/mod.rs"]
mod common;

use micronfc::Error;
use micronfc::device::{Board, BoardBuilder, BoardConfig, Closed};
use micronfc::test_support::{SimulatedBoard, boxed_mock_with_responses};
use micronfc::types::ProtocolVersion;

#[test]
fn builder_requires_transport() {
    match BoardBuilder::new().build() {
        Err(Error::InvalidConfig(_)) => {}
        Err(other) => panic!("expected InvalidConfig, got {:?}", other),
        Ok(_) => panic!("expected InvalidConfig, got Ok"),
    }
}

#[test]
fn builder_opens_and_caches_identity() {
    let transport = boxed_mock_with_responses(vec![common::fixtures::info_frame_v2()]);
    let board = BoardBuilder::new()
        .with_transport(transport)
        .chunk_size(16)
        .open()
        .unwrap();

    assert_eq!(board.config().chunk_size, 16);
    let info = board.board_info().unwrap();
    assert_eq!((info.version, info.revision), (1, 2));
    assert_eq!(info.board_id.as_bytes(), &common::fixtures::sample_board_id_bytes());
}

#[test]
fn zero_chunk_size_fails_before_any_io() {
    assert!(matches!(
        BoardBuilder::new()
            .with_transport(Box::new(SimulatedBoard::new()))
            .chunk_size(0)
            .build(),
        Err(Error::InvalidConfig(_))
    ));

    let sim = SimulatedBoard::new();
    let log = sim.request_log();
    let config = BoardConfig {
        chunk_size: 0,
        ..BoardConfig::default()
    };
    let closed: Board<Closed> = Board::with_config(Box::new(sim), config);
    assert!(matches!(closed.open(), Err(Error::InvalidConfig(_))));
    assert!(log.borrow().is_empty());
}

#[test]
fn legacy_board_opens_with_v1_config() {
    let sim = SimulatedBoard::new().protocol_version(ProtocolVersion::V1);
    let board = BoardBuilder::new()
        .with_transport(Box::new(sim))
        .protocol_version(ProtocolVersion::V1)
        .open()
        .unwrap();

    assert_eq!(board.protocol_version(), ProtocolVersion::V1);
    assert_eq!(board.board_info().unwrap().version, 1);
}

#[test]
fn reset_ends_the_session() {
    let sim = SimulatedBoard::new();
    let log = sim.request_log();
    let board = common::helpers::open_simulated(sim);

    board.reset(false).unwrap();
    assert_eq!(log.borrow().last().unwrap(), &vec![0x02, 0x00]);
}
