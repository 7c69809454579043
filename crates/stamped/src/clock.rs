//! Time source seam for the timestamp hook.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Supplies "now" to the timestamp hook.
///
/// Production code uses [`SystemClock`]; tests and data imports use
/// [`FixedClock`] to pin or step time deterministically.
pub trait Clock {
    /// Current moment in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a caller-controlled instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock reporting the given instant.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Repin the clock to a new instant.
    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_reports_pinned_instant() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(t0);
        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now(), t0);
    }

    #[test]
    fn test_fixed_clock_advances() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(t0);
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), t0 + Duration::seconds(90));
    }
}
