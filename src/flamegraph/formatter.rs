//! Display formatting for durations in the profile's unit.

use crate::profile::ProfileUnit;
use crate::utils::config::SECONDS_THRESHOLD_MS;

/// Pure duration formatter, parameterized once by the profile's unit
///
/// The unit-to-milliseconds factor is computed at construction; `format`
/// does no per-call unit inspection.
#[derive(Debug, Clone, Copy)]
pub struct DurationFormatter {
    unit: ProfileUnit,
    to_ms: f64,
}

impl DurationFormatter {
    pub fn new(unit: ProfileUnit) -> Self {
        let to_ms = match unit {
            ProfileUnit::Nanoseconds => 1e-6,
            ProfileUnit::Microseconds => 1e-3,
            ProfileUnit::Milliseconds => 1.0,
            ProfileUnit::Seconds => 1e3,
            // Unitless; factor unused
            ProfileUnit::Count => 1.0,
        };
        Self { unit, to_ms }
    }

    /// Format a raw value (in the profile's unit) for display
    pub fn format(&self, value: f64) -> String {
        if self.unit == ProfileUnit::Count {
            return format!("{:.0}", value);
        }
        let ms = value * self.to_ms;
        if ms < SECONDS_THRESHOLD_MS {
            format!("{:.2}ms", ms)
        } else {
            format!("{:.2}s", ms / SECONDS_THRESHOLD_MS)
        }
    }

    pub fn unit(&self) -> ProfileUnit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milliseconds_under_threshold() {
        let fmt = DurationFormatter::new(ProfileUnit::Milliseconds);
        assert_eq!(fmt.format(999.994), "999.99ms");
        assert_eq!(fmt.format(0.0), "0.00ms");
    }

    #[test]
    fn test_milliseconds_at_threshold() {
        let fmt = DurationFormatter::new(ProfileUnit::Milliseconds);
        assert_eq!(fmt.format(1000.0), "1.00s");
        assert_eq!(fmt.format(2500.0), "2.50s");
    }

    #[test]
    fn test_other_time_units() {
        let ns = DurationFormatter::new(ProfileUnit::Nanoseconds);
        assert_eq!(ns.format(1_500_000.0), "1.50ms");

        let us = DurationFormatter::new(ProfileUnit::Microseconds);
        assert_eq!(us.format(1500.0), "1.50ms");

        let s = DurationFormatter::new(ProfileUnit::Seconds);
        assert_eq!(s.format(2.0), "2.00s");
    }

    #[test]
    fn test_count_formats_plainly() {
        let fmt = DurationFormatter::new(ProfileUnit::Count);
        assert_eq!(fmt.format(42.0), "42");
        assert_eq!(fmt.format(1500.0), "1500");
    }
}
