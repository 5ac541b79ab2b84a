//! The four dataset generators.
//!
//! Each generator draws a class per iteration, synthesizes a 256-point
//! waveform for that class, injects Gaussian noise with standard deviation
//! `snr`, and rescales the result to unit energy. A degenerate (all-zero)
//! sample aborts the whole call; no partial dataset is ever returned.
//!
//! The plain-named functions use a fresh process-entropy random stream;
//! the `*_with_rng` variants take the stream explicitly for reproducible
//! output and for parallel callers that need independent streams.

use rand_chacha::ChaCha8Rng;

use super::noise::{add_gaussian_noise, create_rng, standard_normal};
use super::waveform::{chirp, phase_grid, sinusoid, two_tone};
use crate::constants::DATA_LENGTH;
use crate::dataset::{BandClass, Dataset, ShapeClass, SinClass};
use crate::error::Result;
use crate::freq::{ChirpRange, FreqRange};
use crate::normalize::l2_normalize;

/// Two-class dataset: silence vs. a single sinusoid, both noise-injected.
///
/// [`SinClass::Tone`] samples draw an integer carrier from `freq` and
/// evaluate `sin(f·x)` over the shared phase grid; [`SinClass::Noise`]
/// samples start from silence. With `snr == 0` a noise-class draw is
/// all-zero and the call fails with
/// [`SynthError::DegenerateSignal`](crate::SynthError::DegenerateSignal).
pub fn sin_gen(snr: f64, freq: FreqRange, length: usize) -> Result<Dataset<SinClass>> {
    sin_gen_with_rng(snr, freq, length, &mut create_rng(None))
}

/// [`sin_gen`] with an explicit random stream.
pub fn sin_gen_with_rng(
    snr: f64,
    freq: FreqRange,
    length: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Dataset<SinClass>> {
    freq.validate()?;

    let phase = phase_grid();
    let mut dataset = Dataset::with_capacity(length);

    for _ in 0..length {
        let class = SinClass::draw(rng);
        let mut output = match class {
            SinClass::Noise => vec![0.0; DATA_LENGTH],
            SinClass::Tone => sinusoid(freq.draw(rng), &phase),
        };

        add_gaussian_noise(&mut output, snr, rng);
        l2_normalize(&mut output)?;
        dataset.push(output, class);
    }

    log::debug!("sin_gen emitted {} samples", dataset.len());
    Ok(dataset)
}

/// Four-class dataset: silence vs. single sinusoids drawn from three
/// separate frequency bands.
pub fn multi_sin_gen(
    snr: f64,
    freq_1: FreqRange,
    freq_2: FreqRange,
    freq_3: FreqRange,
    length: usize,
) -> Result<Dataset<BandClass>> {
    multi_sin_gen_with_rng(snr, freq_1, freq_2, freq_3, length, &mut create_rng(None))
}

/// [`multi_sin_gen`] with an explicit random stream.
pub fn multi_sin_gen_with_rng(
    snr: f64,
    freq_1: FreqRange,
    freq_2: FreqRange,
    freq_3: FreqRange,
    length: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Dataset<BandClass>> {
    freq_1.validate()?;
    freq_2.validate()?;
    freq_3.validate()?;

    let phase = phase_grid();
    let mut dataset = Dataset::with_capacity(length);

    for _ in 0..length {
        let class = BandClass::draw(rng);
        let band = match class {
            BandClass::Noise => None,
            BandClass::Band1 => Some(freq_1),
            BandClass::Band2 => Some(freq_2),
            BandClass::Band3 => Some(freq_3),
        };
        let mut output = match band {
            None => vec![0.0; DATA_LENGTH],
            Some(range) => sinusoid(range.draw(rng), &phase),
        };

        add_gaussian_noise(&mut output, snr, rng);
        l2_normalize(&mut output)?;
        dataset.push(output, class);
    }

    log::debug!("multi_sin_gen emitted {} samples", dataset.len());
    Ok(dataset)
}

/// Four-class dataset of increasing signal complexity: noise, a single
/// sinusoid from `freq_1`, a two-tone superposition from `freq_2`, and a
/// quadratic-phase chirp from `freq_3`.
///
/// When `snr == 0` a noise-class sample is drawn directly from the
/// standard normal distribution instead of silence, so label 0 never
/// degenerates to an all-zero vector. The banded-chirp generator
/// [`multi_time_plot_gen`] deliberately has no such fallback.
pub fn multi_plot_gen(
    snr: f64,
    freq_1: FreqRange,
    freq_2: FreqRange,
    freq_3: ChirpRange,
    length: usize,
) -> Result<Dataset<ShapeClass>> {
    multi_plot_gen_with_rng(snr, freq_1, freq_2, freq_3, length, &mut create_rng(None))
}

/// [`multi_plot_gen`] with an explicit random stream.
pub fn multi_plot_gen_with_rng(
    snr: f64,
    freq_1: FreqRange,
    freq_2: FreqRange,
    freq_3: ChirpRange,
    length: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Dataset<ShapeClass>> {
    freq_1.validate()?;
    freq_2.validate()?;
    freq_3.validate()?;

    let phase = phase_grid();
    let mut dataset = Dataset::with_capacity(length);

    for _ in 0..length {
        let class = ShapeClass::draw(rng);
        let mut output = match class {
            ShapeClass::Noise if snr == 0.0 => standard_normal(DATA_LENGTH, rng),
            ShapeClass::Noise => vec![0.0; DATA_LENGTH],
            ShapeClass::Tone => sinusoid(freq_1.draw(rng), &phase),
            ShapeClass::TwoTone => {
                let f1 = freq_2.draw(rng);
                let f2 = freq_2.draw(rng);
                two_tone(f1, f2, &phase)
            }
            ShapeClass::Chirp => {
                let f1 = freq_3.carrier.draw(rng);
                let f2 = freq_3.sweep.draw(rng);
                chirp(f1, f2, &phase)
            }
        };

        add_gaussian_noise(&mut output, snr, rng);
        l2_normalize(&mut output)?;
        dataset.push(output, class);
    }

    log::debug!("multi_plot_gen emitted {} samples", dataset.len());
    Ok(dataset)
}

/// Four-class dataset: silence vs. quadratic-phase chirps parameterized
/// from three separate chirp ranges.
///
/// Unlike [`multi_plot_gen`], the noise class is always silence plus
/// Gaussian noise; with `snr == 0` a noise-class draw fails with
/// [`SynthError::DegenerateSignal`](crate::SynthError::DegenerateSignal).
pub fn multi_time_plot_gen(
    snr: f64,
    freq_1: ChirpRange,
    freq_2: ChirpRange,
    freq_3: ChirpRange,
    length: usize,
) -> Result<Dataset<BandClass>> {
    multi_time_plot_gen_with_rng(snr, freq_1, freq_2, freq_3, length, &mut create_rng(None))
}

/// [`multi_time_plot_gen`] with an explicit random stream.
pub fn multi_time_plot_gen_with_rng(
    snr: f64,
    freq_1: ChirpRange,
    freq_2: ChirpRange,
    freq_3: ChirpRange,
    length: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Dataset<BandClass>> {
    freq_1.validate()?;
    freq_2.validate()?;
    freq_3.validate()?;

    let phase = phase_grid();
    let mut dataset = Dataset::with_capacity(length);

    for _ in 0..length {
        let class = BandClass::draw(rng);
        let band = match class {
            BandClass::Noise => None,
            BandClass::Band1 => Some(freq_1),
            BandClass::Band2 => Some(freq_2),
            BandClass::Band3 => Some(freq_3),
        };
        let mut output = match band {
            None => vec![0.0; DATA_LENGTH],
            Some(range) => {
                let f1 = range.carrier.draw(rng);
                let f2 = range.sweep.draw(rng);
                chirp(f1, f2, &phase)
            }
        };

        add_gaussian_noise(&mut output, snr, rng);
        l2_normalize(&mut output)?;
        dataset.push(output, class);
    }

    log::debug!("multi_time_plot_gen emitted {} samples", dataset.len());
    Ok(dataset)
}
