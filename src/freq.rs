//! Caller-supplied frequency interval types.
//!
//! Carrier frequencies are drawn from half-open integer intervals. The
//! chirp generators take a pair of intervals, one for the linear phase
//! term and one for the quadratic sweep term.

use rand::RngExt;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SynthError};

/// Half-open integer interval `[low, high)` a carrier frequency is drawn from.
///
/// # Example
/// ```
/// use strainsim::FreqRange;
///
/// let band = FreqRange::new(10, 30).unwrap();
/// assert_eq!(band, FreqRange::from([10, 30]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct FreqRange {
    pub low: i64,
    pub high: i64,
}

impl FreqRange {
    /// Create a validated range. Errors when `low >= high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        let range = Self { low, high };
        range.validate()?;
        Ok(range)
    }

    /// Reject zero-width or inverted intervals before any draw happens.
    pub fn validate(&self) -> Result<()> {
        if self.low >= self.high {
            return Err(SynthError::EmptyFrequencyRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Draw an integer carrier uniformly from `[low, high)`.
    ///
    /// Callers must have validated the range; drawing from an empty
    /// interval panics inside `rand`.
    pub fn draw(&self, rng: &mut ChaCha8Rng) -> i64 {
        rng.random_range(self.low..self.high)
    }
}

impl From<[i64; 2]> for FreqRange {
    fn from(bounds: [i64; 2]) -> Self {
        Self {
            low: bounds[0],
            high: bounds[1],
        }
    }
}

impl From<(i64, i64)> for FreqRange {
    fn from((low, high): (i64, i64)) -> Self {
        Self { low, high }
    }
}

/// Frequency bounds for a quadratic-phase chirp `cos(f1·x + f2·x²)`:
/// `carrier` bounds the linear term `f1`, `sweep` the quadratic term `f2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ChirpRange {
    pub carrier: FreqRange,
    pub sweep: FreqRange,
}

impl ChirpRange {
    /// Create a validated chirp range. Errors when either interval is empty.
    pub fn new(carrier: FreqRange, sweep: FreqRange) -> Result<Self> {
        let range = Self { carrier, sweep };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        self.carrier.validate()?;
        self.sweep.validate()
    }
}

impl From<[i64; 4]> for ChirpRange {
    fn from(bounds: [i64; 4]) -> Self {
        Self {
            carrier: FreqRange::from([bounds[0], bounds[1]]),
            sweep: FreqRange::from([bounds[2], bounds[3]]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::create_rng;

    #[test]
    fn test_new_rejects_empty_interval() {
        assert!(FreqRange::new(10, 10).is_err());
        assert!(FreqRange::new(30, 10).is_err());
        assert!(FreqRange::new(10, 11).is_ok());
    }

    #[test]
    fn test_draw_stays_within_bounds() {
        let range = FreqRange::new(10, 30).unwrap();
        let mut rng = create_rng(Some(7));

        for _ in 0..1000 {
            let f = range.draw(&mut rng);
            assert!((10..30).contains(&f), "draw out of bounds: {}", f);
        }
    }

    #[test]
    fn test_single_value_interval_is_deterministic() {
        let range = FreqRange::new(10, 11).unwrap();
        let mut rng = create_rng(Some(7));

        for _ in 0..100 {
            assert_eq!(range.draw(&mut rng), 10);
        }
    }

    #[test]
    fn test_chirp_range_from_flat_bounds() {
        let range = ChirpRange::from([100, 120, 1, 5]);
        assert_eq!(range.carrier, FreqRange::from([100, 120]));
        assert_eq!(range.sweep, FreqRange::from([1, 5]));
        assert!(range.validate().is_ok());
    }

    #[test]
    fn test_chirp_range_validates_both_intervals() {
        assert!(ChirpRange::from([100, 120, 5, 5]).validate().is_err());
        assert!(ChirpRange::from([120, 100, 1, 5]).validate().is_err());
    }
}
