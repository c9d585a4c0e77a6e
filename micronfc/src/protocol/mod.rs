// micronfc/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use frame::Frame;
pub use responses::*;
