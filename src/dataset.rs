//! Dataset container and per-generator class labels.
//!
//! Labels are fieldless enums with explicit discriminants rather than raw
//! integers, so an out-of-set label is unrepresentable and every generator
//! matches exhaustively over its class set.

use rand::RngExt;
use rand_chacha::ChaCha8Rng;

/// One synthesized time series of [`crate::constants::DATA_LENGTH`] points.
pub type Sample = Vec<f64>;

/// Index-aligned samples and labels produced by one generator call.
///
/// `samples()[i]` was synthesized for `labels()[i]`; the pairing is
/// maintained by construction since samples and labels are only appended
/// together.
#[derive(Clone, Debug)]
pub struct Dataset<L> {
    samples: Vec<Sample>,
    labels: Vec<L>,
}

impl<L> Dataset<L> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample/label pair.
    pub fn push(&mut self, sample: Sample, label: L) {
        self.samples.push(sample);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Iterate over aligned (sample, label) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Sample, &L)> {
        self.samples.iter().zip(self.labels.iter())
    }

    /// Consume the dataset into its parallel sample and label vectors.
    pub fn into_parts(self) -> (Vec<Sample>, Vec<L>) {
        (self.samples, self.labels)
    }
}

impl<L> Default for Dataset<L> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            labels: Vec::new(),
        }
    }
}

/// Two-class labels emitted by [`crate::synth::sin_gen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SinClass {
    /// Noise-only sample (zero base signal).
    Noise = 0,
    /// Single sinusoid.
    Tone = 1,
}

impl SinClass {
    /// Uniform draw over both classes.
    pub(crate) fn draw(rng: &mut ChaCha8Rng) -> Self {
        match rng.random_range(0..2u8) {
            0 => Self::Noise,
            _ => Self::Tone,
        }
    }

    /// Integer class index, matching the sample's position in the label set.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<SinClass> for u8 {
    fn from(class: SinClass) -> u8 {
        class as u8
    }
}

/// Four-class frequency-band labels emitted by [`crate::synth::multi_sin_gen`]
/// and [`crate::synth::multi_time_plot_gen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandClass {
    Noise = 0,
    Band1 = 1,
    Band2 = 2,
    Band3 = 3,
}

impl BandClass {
    pub(crate) fn draw(rng: &mut ChaCha8Rng) -> Self {
        match rng.random_range(0..4u8) {
            0 => Self::Noise,
            1 => Self::Band1,
            2 => Self::Band2,
            _ => Self::Band3,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<BandClass> for u8 {
    fn from(class: BandClass) -> u8 {
        class as u8
    }
}

/// Four-class waveform-shape labels emitted by [`crate::synth::multi_plot_gen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    Noise = 0,
    /// Single sinusoid.
    Tone = 1,
    /// Superposition of two independently drawn sinusoids.
    TwoTone = 2,
    /// Quadratic-phase cosine.
    Chirp = 3,
}

impl ShapeClass {
    pub(crate) fn draw(rng: &mut ChaCha8Rng) -> Self {
        match rng.random_range(0..4u8) {
            0 => Self::Noise,
            1 => Self::Tone,
            2 => Self::TwoTone,
            _ => Self::Chirp,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<ShapeClass> for u8 {
    fn from(class: ShapeClass) -> u8 {
        class as u8
    }
}
