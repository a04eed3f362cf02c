//! Time representation for SEP2
//!
//! All SEP2 times are integer seconds since the Unix epoch, always UTC,
//! serialized on the wire as the bare integer rather than a calendar string.

use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch, UTC.
pub type TimeType = i64;

/// A time interval: `start` plus `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeInterval {
    /// Duration of the interval in seconds
    pub duration: u32,
    /// Start of the interval, seconds since epoch
    pub start: TimeType,
}

impl DateTimeInterval {
    /// Create a new interval.
    pub fn new(start: TimeType, duration: u32) -> Self {
        Self { duration, start }
    }

    /// The first instant after the interval.
    pub fn end(&self) -> TimeType {
        self.start + self.duration as i64
    }

    /// Whether `t` falls within the interval (start inclusive, end exclusive).
    pub fn contains(&self, t: TimeType) -> bool {
        t >= self.start && t < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_end() {
        let i = DateTimeInterval::new(1_700_000_000, 300);
        assert_eq!(i.end(), 1_700_000_300);
    }

    #[test]
    fn test_interval_contains() {
        let i = DateTimeInterval::new(100, 10);
        assert!(i.contains(100));
        assert!(i.contains(109));
        assert!(!i.contains(110));
        assert!(!i.contains(99));
    }
}
