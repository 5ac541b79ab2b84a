use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Cannot min-max rescale an empty or constant sequence")]
    InvalidRange,

    #[error("Degenerate sample: cannot energy-normalize an all-zero sequence")]
    DegenerateSignal,

    #[error("Empty frequency range: [{low}, {high})")]
    EmptyFrequencyRange { low: i64, high: i64 },
}

pub type Result<T> = std::result::Result<T, SynthError>;
