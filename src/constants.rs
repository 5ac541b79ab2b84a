//! Numeric constants shared by the waveform generators.

/// Number of points in every synthesized sample.
pub const DATA_LENGTH: usize = 256;

/// Span of the phase grid each waveform is evaluated over, [0, 2π].
pub const PHASE_SPAN: f64 = 2.0 * std::f64::consts::PI;
