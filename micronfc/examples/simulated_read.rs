// Read an NDEF message from an in-memory board.
//
// Run with `RUST_LOG=debug cargo run --example simulated_read` to see each
// request; `RUST_LOG=trace` also dumps the raw frames.

use anyhow::Context;
use micronfc::prelude::*;
use micronfc::test_support::SimulatedBoard;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let message = vec![
        NdefRecord::smart_poster(vec![
            NdefRecord::uri("http://www.micronfcboard.com/"),
            NdefRecord::text("MicroNFCBoard", "en"),
        ]),
        NdefRecord::mime("text/plain", b"hello".to_vec()),
    ];
    let sim = SimulatedBoard::with_message(&message)
        .uid(&[0x04, 0x5A, 0x2B, 0x3C, 0x4D, 0x80, 0x81])
        .status_bits(0x0000_0206);

    let mut board = BoardBuilder::new()
        .with_transport(Box::new(sim))
        .open()
        .context("opening simulated board")?;

    if let Some(info) = board.board_info() {
        println!("board {} firmware {}.{}", info.board_id, info.version, info.revision);
    }

    let status = board.status()?;
    println!(
        "polling={} connected={} ndef={} tag={:?}",
        status.polling, status.connected, status.ndef_present, status.tag_type
    );

    if status.connected {
        println!("uid {}", board.nfc_info()?);
    }

    if status.ndef_present {
        for (i, record) in board.read_message().context("reading message")?.iter().enumerate() {
            println!("record {}: {}", i, record);
        }
    }

    board.set_leds(false, false)?;
    board.close()?;
    Ok(())
}
