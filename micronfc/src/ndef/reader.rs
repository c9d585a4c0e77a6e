// micronfc/src/ndef/reader.rs

use log::{debug, warn};

use crate::device::{Board, Opened};
use crate::ndef::record::NdefRecord;
use crate::ndef::text;
use crate::types::{RecordType, TextEncoding};
use crate::{Error, Result};

// Record indices are u16 on the wire
const RECORD_INDEX_SPACE: u32 = 0x1_0000;

/// Read the current NDEF message and resolve every record, smart poster
/// children included. Records of unknown type are skipped.
pub fn read_message(board: &mut Board<Opened>) -> Result<Vec<NdefRecord>> {
    let count = board.message_info()?;
    debug!("message holds {} top-level records", count);
    resolve_records(board, 0, count)
}

/// Resolve `count` records starting at index `start`, in index order.
pub fn resolve_records(board: &mut Board<Opened>, start: u16, count: u16) -> Result<Vec<NdefRecord>> {
    resolve_at_depth(board, start, count, 0)
}

fn resolve_at_depth(
    board: &mut Board<Opened>,
    start: u16,
    count: u16,
    depth: usize,
) -> Result<Vec<NdefRecord>> {
    if u32::from(start) + u32::from(count) > RECORD_INDEX_SPACE {
        return Err(Error::InvalidRecordRange { start, count });
    }

    // count comes from the board; grow as records resolve
    let mut records = Vec::new();
    for offset in 0..count {
        // start + offset < 0x10000 after the range check
        if let Some(record) = resolve_record(board, start + offset, depth)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn resolve_record(board: &mut Board<Opened>, record: u16, depth: usize) -> Result<Option<NdefRecord>> {
    let descriptor = board.record_info(record)?;
    debug!("record {}: {:?} {:?}", record, descriptor.record_type, descriptor.fields);

    let resolved = match descriptor.record_type {
        RecordType::Unknown => {
            warn!("skipping record {} of unknown type", record);
            return Ok(None);
        }
        RecordType::Uri => {
            let len = descriptor.field(0)?;
            let uri = text::decode_utf8(&fetch_item(board, record, 0, len)?)?;
            NdefRecord::Uri { uri }
        }
        RecordType::Text => {
            let encoding = TextEncoding::try_from(descriptor.field(0)?)?;
            let language_len = descriptor.field(1)?;
            let text_len = descriptor.field(2)?;
            let language_code = text::decode_utf8(&fetch_item(board, record, 0, language_len)?)?;
            let text = text::decode(&fetch_item(board, record, 1, text_len)?, encoding)?;
            NdefRecord::Text {
                text,
                language_code,
            }
        }
        RecordType::SmartPoster => {
            let child_start = descriptor.field(0)?;
            let child_count = descriptor.field(1)?;
            let limit = board.config().max_record_depth;
            if depth + 1 > limit {
                return Err(Error::RecursionLimitExceeded { limit });
            }
            let children = resolve_at_depth(board, child_start, child_count, depth + 1)?;
            NdefRecord::SmartPoster { children }
        }
        RecordType::Mime => {
            let type_len = descriptor.field(0)?;
            let data_len = descriptor.field(1)?;
            let mime_type = text::decode_utf8(&fetch_item(board, record, 0, type_len)?)?;
            let data = fetch_item(board, record, 1, data_len)?;
            NdefRecord::Mime { mime_type, data }
        }
    };

    Ok(Some(resolved))
}

/// Read one item of a record in slices of at most `chunk_size` bytes at
/// increasing offsets. A zero-length item issues no request.
pub fn fetch_item(board: &mut Board<Opened>, record: u16, item: u8, total_len: u16) -> Result<Vec<u8>> {
    let chunk_size = board.config().chunk_size;
    let mut data = Vec::with_capacity(total_len as usize);
    let mut offset: u16 = 0;

    while offset < total_len {
        let length = chunk_size.min(total_len - offset);
        let chunk = board.record_data(record, item, offset, length)?;
        data.extend_from_slice(&chunk);
        offset += length;
    }
    Ok(data)
}
