// micronfc/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::BoardBuilder;
pub use config::BoardConfig;
pub use handle::{Board, Closed, Opened};
