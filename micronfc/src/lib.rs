// micronfc/src/lib.rs

//! micronfc
//!
//! Host-side driver for the MicroNFCBoard: request/response framing over a
//! byte transport and reconstruction of the NDEF message held by the tag.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
