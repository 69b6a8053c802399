//! Injectable clock and randomness
//!
//! Challenge generation and notification stamping read the time and draw
//! random numbers through these traits so tests can pin both.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

use crate::error::{GamificationError, Result};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Result<DateTime<Utc>>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>> {
        Ok(Utc::now())
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>> {
        Ok(self.0)
    }
}

/// Advances by a fixed step after every read
#[derive(Debug)]
pub struct TickingClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl TickingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> Result<DateTime<Utc>> {
        let now = self.next.get();
        self.next.set(now + self.step);
        Ok(now)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<DateTime<Utc>> {
        (**self).now()
    }
}

/// Uniform index selection
pub trait RandomSource {
    /// Index in `0..len`; `len` must be non-zero
    fn pick(&mut self, len: usize) -> Result<usize>;
}

/// Operating-system randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn pick(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(GamificationError::EmptyCatalog);
        }
        let len = len as u64;
        // Reject the tail of the u64 range so every index is equally likely
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let mut bytes = [0u8; 8];
            getrandom::getrandom(&mut bytes)
                .map_err(|e| GamificationError::Dependency(format!("OS random source: {e}")))?;
            let value = u64::from_le_bytes(bytes);
            if value < zone {
                return Ok((value % len) as usize);
            }
        }
    }
}

/// Replays a fixed sequence (wrapped into range), cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(GamificationError::EmptyCatalog);
        }
        if self.values.is_empty() {
            return Err(GamificationError::Dependency(
                "sequence random source has no values".to_string(),
            ));
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        Ok(value % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_os_random_in_range() {
        let mut rng = OsRandom;
        for _ in 0..200 {
            assert!(rng.pick(5).unwrap() < 5);
        }
        assert_eq!(rng.pick(1).unwrap(), 0);
        assert_eq!(rng.pick(0), Err(GamificationError::EmptyCatalog));
    }

    #[test]
    fn test_sequence_random_cycles_and_wraps() {
        let mut rng = SequenceRandom::new(vec![1, 7]);
        assert_eq!(rng.pick(5).unwrap(), 1);
        assert_eq!(rng.pick(5).unwrap(), 2);
        assert_eq!(rng.pick(5).unwrap(), 1);
    }

    #[test]
    fn test_empty_sequence_is_dependency_error() {
        let mut rng = SequenceRandom::new(Vec::new());
        assert!(matches!(rng.pick(3), Err(GamificationError::Dependency(_))));
    }

    #[test]
    fn test_ticking_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let clock = TickingClock::new(start, Duration::milliseconds(1));
        assert_eq!(clock.now().unwrap(), start);
        assert_eq!(clock.now().unwrap(), start + Duration::milliseconds(1));
    }
}
