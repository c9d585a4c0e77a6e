use micronfc::protocol::Command;
use micronfc::protocol::codec::encode_command_frame;

#[test]
fn record_requests_are_big_endian() {
    assert_eq!(
        encode_command_frame(&Command::NfcGetRecordInfo { record: 0x0102 }),
        vec![0x07, 0x01, 0x02]
    );

    let data = Command::NfcGetRecordData {
        record: 0x0003,
        item: 1,
        offset: 0x0150,
        length: 0x0028,
    };
    assert_eq!(
        encode_command_frame(&data),
        vec![0x08, 0x00, 0x03, 0x01, 0x01, 0x50, 0x00, 0x28]
    );
}

#[test]
fn flag_commands_encode_single_bytes() {
    assert_eq!(
        encode_command_frame(&Command::Reset { isp: false }),
        vec![0x02, 0x00]
    );
    assert_eq!(
        encode_command_frame(&Command::Leds {
            led1: false,
            led2: true
        }),
        vec![0x03, 0x00, 0x01]
    );
    assert_eq!(
        encode_command_frame(&Command::NfcPoll { enable: false }),
        vec![0x04, 0x00]
    );
}

#[test]
fn argumentless_commands_are_bare_opcodes() {
    for (cmd, code) in [
        (Command::GetStatus, 0x00u8),
        (Command::Info, 0x01),
        (Command::NfcGetInfo, 0x05),
        (Command::NfcGetMessageInfo, 0x06),
    ] {
        assert_eq!(encode_command_frame(&cmd), vec![code]);
    }
}
