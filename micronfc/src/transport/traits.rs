// micronfc/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/board logic.
///
/// Delimiting frames is the transport's job: `receive` returns exactly one
/// complete response frame. Retry and timeout policy also live here, never
/// in the codec.
pub trait Transport {
    /// Send one raw request frame to the board
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Block until one response frame is available or the timeout (in
    /// milliseconds) expires
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Release the underlying channel. The default does nothing so
    /// in-memory transports need not implement it.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
