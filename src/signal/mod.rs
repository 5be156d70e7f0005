//! Synthetic data sources for the fixture builder.
//!
//! Everything here is deterministic: direct waveform evaluation, seeded
//! noise, fixed-parameter spectral estimation. Nothing touches hardware or
//! wall-clock time.

mod field;
mod lif;
mod synth;
mod welch;

pub use field::{difference_of_gaussians, GaussianParams};
pub use lif::{LifNeuron, LifTrace};
pub use synth::{multi_tone, sample_count, tone_burst, zero_crossings, BurstPhase, ToneComponent};
pub use welch::{psd_twosided, WelchSpectrum};
