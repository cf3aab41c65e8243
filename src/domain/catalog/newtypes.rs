// SPDX-License-Identifier: MPL-2.0
//! Catalog newtypes.

use std::time::Duration;

/// Request timeout bounds (1 to 120 seconds).
pub mod request_timeout_bounds {
    /// Minimum timeout in seconds.
    pub const MIN_SECS: u64 = 1;
    /// Maximum timeout in seconds.
    pub const MAX_SECS: u64 = 120;
    /// Default timeout in seconds.
    pub const DEFAULT_SECS: u64 = 10;
}

/// Timeout applied to every catalog and image request.
///
/// Values outside 1–120 seconds are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(u64);

impl RequestTimeout {
    /// Creates a new timeout, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self(secs.clamp(
            request_timeout_bounds::MIN_SECS,
            request_timeout_bounds::MAX_SECS,
        ))
    }

    /// Returns the timeout in seconds.
    #[must_use]
    pub fn secs(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(request_timeout_bounds::DEFAULT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_timeout_clamps_to_valid_range() {
        assert_eq!(RequestTimeout::new(0).secs(), request_timeout_bounds::MIN_SECS);
        assert_eq!(
            RequestTimeout::new(10_000).secs(),
            request_timeout_bounds::MAX_SECS
        );
        assert_eq!(RequestTimeout::new(30).secs(), 30);
    }

    #[test]
    fn request_timeout_default_is_ten_seconds() {
        assert_eq!(
            RequestTimeout::default().as_duration(),
            Duration::from_secs(10)
        );
    }
}
