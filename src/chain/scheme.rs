//! Bucketing wall-clock time into integer indices.
//!
//! `index = ms / tick`, truncated toward zero.  Inputs are bounded to
//! [`MAX_SAFE_INTEGER`] so that indices computed here agree with peers
//! that keep timestamps in IEEE-754 doubles.

use chrono::Utc;

use crate::errors::{KeyRatchetError, Result};

/// Largest integer exactly representable in an IEEE-754 double (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Milliseconds per second.
const MILLIS_PER_SECOND: i64 = 1_000;

/// A time-bucketing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeIndexedScheme {
    tick: i64,
}

impl TimeIndexedScheme {
    /// One-hour buckets.
    pub const HOUR: Self = Self { tick: 3_600_000 };

    /// Create a scheme with buckets `tick` milliseconds wide.
    ///
    /// `tick` must be in `1..=MAX_SAFE_INTEGER`.
    pub fn new(tick: i64) -> Result<Self> {
        if tick <= 0 {
            return Err(KeyRatchetError::InvalidArgument(format!(
                "tick must be positive (got {tick})"
            )));
        }
        if tick > MAX_SAFE_INTEGER {
            return Err(KeyRatchetError::InvalidArgument(format!(
                "tick must not exceed {MAX_SAFE_INTEGER} (got {tick})"
            )));
        }
        Ok(Self { tick })
    }

    /// Bucket width in milliseconds.
    pub fn tick(&self) -> i64 {
        self.tick
    }

    /// Index of the bucket containing `milliseconds` since the Unix epoch.
    pub fn index_from_milliseconds(&self, milliseconds: i64) -> Result<i64> {
        check_safe(milliseconds, "milliseconds")?;
        Ok(milliseconds / self.tick)
    }

    /// Index of the bucket containing `seconds` since the Unix epoch.
    pub fn index_from_seconds(&self, seconds: i64) -> Result<i64> {
        let milliseconds = seconds.checked_mul(MILLIS_PER_SECOND).ok_or_else(|| {
            KeyRatchetError::InvalidArgument(format!("seconds value {seconds} is out of range"))
        })?;
        check_safe(milliseconds, "seconds * 1000")?;
        Ok(milliseconds / self.tick)
    }

    /// Index of the bucket containing the current wall-clock time.
    pub fn current_index(&self) -> Result<i64> {
        self.index_from_milliseconds(Utc::now().timestamp_millis())
    }

    /// First millisecond covered by bucket `index`.
    pub fn bucket_start_millis(&self, index: i64) -> Result<i64> {
        let start = index.checked_mul(self.tick).ok_or_else(|| {
            KeyRatchetError::InvalidArgument(format!("time index {index} is out of range"))
        })?;
        check_safe(start, "bucket start")?;
        Ok(start)
    }
}

impl Default for TimeIndexedScheme {
    fn default() -> Self {
        Self::HOUR
    }
}

fn check_safe(value: i64, what: &str) -> Result<()> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER.unsigned_abs() {
        return Err(KeyRatchetError::InvalidArgument(format!(
            "{what} {value} exceeds the safe range of ±{MAX_SAFE_INTEGER}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_boundaries() {
        let s = TimeIndexedScheme::HOUR;
        assert_eq!(s.tick(), 3_600_000);
        assert_eq!(s.index_from_milliseconds(0).unwrap(), 0);
        assert_eq!(s.index_from_milliseconds(3_599_999).unwrap(), 0);
        assert_eq!(s.index_from_milliseconds(3_600_000).unwrap(), 1);
    }

    #[test]
    fn seconds_scale_to_milliseconds() {
        let s = TimeIndexedScheme::HOUR;
        assert_eq!(s.index_from_seconds(3_599).unwrap(), 0);
        assert_eq!(s.index_from_seconds(3_600).unwrap(), 1);
        assert_eq!(s.index_from_seconds(7_200).unwrap(), 2);
    }

    #[test]
    fn negative_times_truncate_toward_zero() {
        let s = TimeIndexedScheme::new(1_000).unwrap();
        assert_eq!(s.index_from_milliseconds(-1).unwrap(), 0);
        assert_eq!(s.index_from_milliseconds(-1_000).unwrap(), -1);
        assert_eq!(s.index_from_milliseconds(-1_999).unwrap(), -1);
    }

    #[test]
    fn rejects_non_positive_tick() {
        assert!(matches!(
            TimeIndexedScheme::new(0),
            Err(KeyRatchetError::InvalidArgument(_))
        ));
        assert!(TimeIndexedScheme::new(-5).is_err());
    }

    #[test]
    fn rejects_tick_beyond_safe_range() {
        assert!(TimeIndexedScheme::new(MAX_SAFE_INTEGER).is_ok());
        assert!(TimeIndexedScheme::new(MAX_SAFE_INTEGER + 1).is_err());
    }

    #[test]
    fn rejects_unsafe_inputs() {
        let s = TimeIndexedScheme::HOUR;
        assert!(s.index_from_milliseconds(MAX_SAFE_INTEGER).is_ok());
        assert!(s.index_from_milliseconds(-MAX_SAFE_INTEGER).is_ok());
        assert!(s.index_from_milliseconds(MAX_SAFE_INTEGER + 1).is_err());
        assert!(s.index_from_milliseconds(i64::MIN).is_err());
        assert!(s.index_from_seconds(i64::MAX).is_err());
        assert!(s.index_from_seconds(MAX_SAFE_INTEGER / 1000 + 1).is_err());
    }

    #[test]
    fn current_index_tracks_clock() {
        let s = TimeIndexedScheme::HOUR;
        let before = s.index_from_milliseconds(Utc::now().timestamp_millis()).unwrap();
        let now = s.current_index().unwrap();
        assert!(now >= before && now <= before + 1);
    }

    #[test]
    fn bucket_start_is_inverse_of_index() {
        let s = TimeIndexedScheme::HOUR;
        let start = s.bucket_start_millis(5).unwrap();
        assert_eq!(start, 18_000_000);
        assert_eq!(s.index_from_milliseconds(start).unwrap(), 5);
        assert_eq!(s.index_from_milliseconds(start - 1).unwrap(), 4);
        assert!(s.bucket_start_millis(i64::MAX).is_err());
    }
}
