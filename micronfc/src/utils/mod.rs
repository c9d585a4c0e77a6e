//! Utilities for micronfc: hex rendering of identity strings and timeout
//! helpers.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
