pub mod constants;
pub mod dataset;
pub mod error;
pub mod freq;
pub mod normalize;
pub mod synth;

pub use dataset::{BandClass, Dataset, Sample, ShapeClass, SinClass};
pub use error::{Result, SynthError};
pub use freq::{ChirpRange, FreqRange};
pub use normalize::{l2_normalize, normalize};
pub use synth::{multi_plot_gen, multi_sin_gen, multi_time_plot_gen, sin_gen};
