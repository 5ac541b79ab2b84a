//! Rescaling primitives.
//!
//! `normalize` is a standalone min-max utility; the generators themselves
//! use `l2_normalize` so every emitted sample carries unit energy
//! regardless of which class produced it.

use crate::error::{Result, SynthError};

/// Min-max rescale a sequence into `[target_min, target_max]`.
///
/// The input minimum maps to `target_min` and the maximum to `target_max`;
/// everything in between is rescaled linearly. The input is not mutated.
///
/// Errors with [`SynthError::InvalidRange`] when the sequence is empty or
/// constant (the source range has zero width), or when
/// `target_min >= target_max`.
///
/// # Example
/// ```
/// use strainsim::normalize;
///
/// let scaled = normalize(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 1.0).unwrap();
/// assert_eq!(scaled, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn normalize(seq: &[f64], target_min: f64, target_max: f64) -> Result<Vec<f64>> {
    if target_min >= target_max {
        return Err(SynthError::InvalidRange);
    }

    let Some(&first) = seq.first() else {
        return Err(SynthError::InvalidRange);
    };
    let (min, max) = seq
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if max == min {
        return Err(SynthError::InvalidRange);
    }

    let scale = (target_max - target_min) / (max - min);
    Ok(seq.iter().map(|&v| target_min + (v - min) * scale).collect())
}

/// Rescale a sample in place to unit Euclidean norm by dividing every
/// element by `sqrt(sum(v_i^2))`.
///
/// Errors with [`SynthError::DegenerateSignal`] when the sample is
/// identically zero, rather than propagating NaN into a dataset.
pub fn l2_normalize(sample: &mut [f64]) -> Result<()> {
    let power: f64 = sample.iter().map(|&v| v * v).sum();
    if power == 0.0 {
        return Err(SynthError::DegenerateSignal);
    }

    let norm = power.sqrt();
    for v in sample.iter_mut() {
        *v /= norm;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_maps_extremes_to_targets() {
        let scaled = normalize(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 1.0).unwrap();
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        for (&got, &want) in scaled.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalize_custom_target_range() {
        let scaled = normalize(&[0.0, 10.0], -1.0, 1.0).unwrap();
        assert_abs_diff_eq!(scaled[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(scaled[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_rejects_constant_sequence() {
        assert!(normalize(&[5.0, 5.0, 5.0], 0.0, 1.0).is_err());
    }

    #[test]
    fn test_normalize_rejects_empty_sequence() {
        assert!(normalize(&[], 0.0, 1.0).is_err());
    }

    #[test]
    fn test_normalize_rejects_inverted_target_range() {
        assert!(normalize(&[1.0, 2.0], 1.0, 0.0).is_err());
        assert!(normalize(&[1.0, 2.0], 0.5, 0.5).is_err());
    }

    #[test]
    fn test_normalize_does_not_mutate_input() {
        let input = vec![3.0, 1.0, 2.0];
        let _ = normalize(&input, 0.0, 1.0).unwrap();
        assert_eq!(input, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_l2_normalize_yields_unit_energy() {
        let mut sample = vec![3.0, 4.0];
        l2_normalize(&mut sample).unwrap();
        assert_abs_diff_eq!(sample[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(sample[1], 0.8, epsilon = 1e-12);

        let energy: f64 = sample.iter().map(|v| v * v).sum();
        assert_abs_diff_eq!(energy, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_l2_normalize_rejects_all_zero_sample() {
        let mut sample = vec![0.0; 256];
        assert!(l2_normalize(&mut sample).is_err());
    }
}
