//! Timeout helpers used across the crate.
//!
//! The board answers every request from its own buffer, so a single
//! default read timeout is enough; callers override it through
//! `BoardConfig`.

use std::time::Duration;

/// Default read timeout in milliseconds used when a caller doesn't provide
/// an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}
