// Copyright 2025 benchtrack Contributors
// SPDX-License-Identifier: Apache-2.0

//! Scaling of raw seconds into a human-readable time unit.

use std::fmt;

/// Time unit picked by [`human_readable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Nanoseconds
    Nanos,
    /// Microseconds
    Micros,
    /// Milliseconds
    Millis,
    /// Seconds
    Seconds,
}

impl TimeUnit {
    /// Label used in entry `extra` text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nanos => "nsec",
            Self::Micros => "usec",
            Self::Millis => "msec",
            Self::Seconds => "sec",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale a duration in seconds to the largest unit that keeps it at or above 1.
///
/// Thresholds are strict: exactly `1e-6` is reported in microseconds.
pub fn human_readable(seconds: f64) -> (f64, TimeUnit) {
    if seconds < 1.0e-6 {
        (seconds * 1e9, TimeUnit::Nanos)
    } else if seconds < 1.0e-3 {
        (seconds * 1e6, TimeUnit::Micros)
    } else if seconds < 1.0 {
        (seconds * 1e3, TimeUnit::Millis)
    } else {
        (seconds, TimeUnit::Seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_scales_into_each_unit() {
        let (v, u) = human_readable(2.5e-8);
        assert_eq!(u, TimeUnit::Nanos);
        assert!(close(v, 25.0));

        let (v, u) = human_readable(4.2e-5);
        assert_eq!(u, TimeUnit::Micros);
        assert!(close(v, 42.0));

        let (v, u) = human_readable(0.125);
        assert_eq!(u, TimeUnit::Millis);
        assert!(close(v, 125.0));

        assert_eq!(human_readable(3.0), (3.0, TimeUnit::Seconds));
    }

    #[test]
    fn test_boundaries_move_to_larger_unit() {
        assert_eq!(human_readable(1.0e-6).1, TimeUnit::Micros);
        assert_eq!(human_readable(1.0e-3).1, TimeUnit::Millis);
        assert_eq!(human_readable(1.0).1, TimeUnit::Seconds);
    }

    #[test]
    fn test_just_below_boundaries_stay_in_smaller_unit() {
        assert_eq!(human_readable(0.999e-6).1, TimeUnit::Nanos);
        assert_eq!(human_readable(0.999e-3).1, TimeUnit::Micros);
        assert_eq!(human_readable(0.999).1, TimeUnit::Millis);
    }

    #[test]
    fn test_zero_is_nanoseconds() {
        assert_eq!(human_readable(0.0), (0.0, TimeUnit::Nanos));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeUnit::Nanos.to_string(), "nsec");
        assert_eq!(TimeUnit::Seconds.label(), "sec");
    }
}
