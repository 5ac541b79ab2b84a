//! Random streams and Gaussian noise injection.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Seeded ChaCha8 stream for reproducible generation, or a process-entropy
/// stream when no seed is given. Parallel callers should create one stream
/// per worker.
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Add zero-mean Gaussian noise with standard deviation `sd` to every
/// element in place. A zero `sd` leaves the signal untouched.
///
/// `sd` must be non-negative and finite.
pub fn add_gaussian_noise(signal: &mut [f64], sd: f64, rng: &mut ChaCha8Rng) {
    if sd == 0.0 {
        return;
    }

    let normal = Normal::new(0.0, sd).unwrap();
    for sample in signal.iter_mut() {
        *sample += normal.sample(rng);
    }
}

/// Draw `len` standard-normal values (mean 0, sd 1).
pub fn standard_normal(len: usize, rng: &mut ChaCha8Rng) -> Vec<f64> {
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..len).map(|_| normal.sample(rng)).collect()
}
