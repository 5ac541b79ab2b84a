mod generators;
mod noise;
mod waveform;

pub use generators::{
    multi_plot_gen, multi_plot_gen_with_rng, multi_sin_gen, multi_sin_gen_with_rng,
    multi_time_plot_gen, multi_time_plot_gen_with_rng, sin_gen, sin_gen_with_rng,
};
pub use noise::{add_gaussian_noise, create_rng, standard_normal};
pub use waveform::{chirp, phase_grid, sinusoid, two_tone};
