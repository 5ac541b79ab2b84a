//! Pure waveform construction.
//!
//! Every generator evaluates its waveform over the same phase grid:
//! [`crate::constants::DATA_LENGTH`] points evenly spaced over [0, 2π],
//! endpoints included. Integer carrier frequencies then give whole numbers
//! of cycles across the window.

use crate::constants::{DATA_LENGTH, PHASE_SPAN};

/// Phase grid with `DATA_LENGTH` points over [0, 2π], both endpoints included.
pub fn phase_grid() -> Vec<f64> {
    let step = PHASE_SPAN / (DATA_LENGTH - 1) as f64;
    (0..DATA_LENGTH).map(|i| i as f64 * step).collect()
}

/// Single sinusoid `sin(f·x)` over the given phase grid.
pub fn sinusoid(freq: i64, phase: &[f64]) -> Vec<f64> {
    phase.iter().map(|&x| (freq as f64 * x).sin()).collect()
}

/// Two-tone superposition `sin(f1·x) + sin(f2·x)`.
pub fn two_tone(freq_1: i64, freq_2: i64, phase: &[f64]) -> Vec<f64> {
    phase
        .iter()
        .map(|&x| (freq_1 as f64 * x).sin() + (freq_2 as f64 * x).sin())
        .collect()
}

/// Quadratic-phase cosine `cos(f1·x + f2·x²)`; the instantaneous frequency
/// rises across the window, giving a chirp-like sweep.
pub fn chirp(freq_1: i64, freq_2: i64, phase: &[f64]) -> Vec<f64> {
    phase
        .iter()
        .map(|&x| (freq_1 as f64 * x + freq_2 as f64 * x * x).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_phase_grid_shape_and_endpoints() {
        let grid = phase_grid();
        assert_eq!(grid.len(), DATA_LENGTH);
        assert_abs_diff_eq!(grid[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grid[DATA_LENGTH - 1], 2.0 * PI, epsilon = 1e-12);

        // Uniform spacing
        let step = grid[1] - grid[0];
        for pair in grid.windows(2) {
            assert_abs_diff_eq!(pair[1] - pair[0], step, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sinusoid_matches_closed_form() {
        let grid = phase_grid();
        let wave = sinusoid(10, &grid);

        assert_eq!(wave.len(), DATA_LENGTH);
        for (&y, &x) in wave.iter().zip(grid.iter()) {
            assert_abs_diff_eq!(y, (10.0 * x).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_tone_is_sum_of_sinusoids() {
        let grid = phase_grid();
        let combined = two_tone(3, 7, &grid);
        let a = sinusoid(3, &grid);
        let b = sinusoid(7, &grid);

        for i in 0..DATA_LENGTH {
            assert_abs_diff_eq!(combined[i], a[i] + b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_chirp_starts_at_unity_and_sweeps() {
        let grid = phase_grid();
        let wave = chirp(100, 5, &grid);

        // cos(0) at the left edge, quadratic term contributing at the right
        assert_abs_diff_eq!(wave[0], 1.0, epsilon = 1e-12);
        let x = grid[DATA_LENGTH - 1];
        assert_abs_diff_eq!(
            wave[DATA_LENGTH - 1],
            (100.0 * x + 5.0 * x * x).cos(),
            epsilon = 1e-9
        );

        // A zero sweep term degenerates to a plain cosine
        let flat = chirp(10, 0, &grid);
        for (&y, &x) in flat.iter().zip(grid.iter()) {
            assert_abs_diff_eq!(y, (10.0 * x).cos(), epsilon = 1e-12);
        }
    }
}
