// micronfc/src/ndef/mod.rs

//! NDEF message reconstruction. The board exposes a flat record table;
//! `reader` walks it through a `Board<Opened>` and rebuilds the tree.

pub mod reader;
pub mod record;
pub mod text;

pub use reader::{fetch_item, read_message, resolve_records};
pub use record::NdefRecord;
