//! Generation parameters for the fixture builder.
//!
//! Grouped into small config structs with documented defaults. The process
//! takes no flags, options, or environment variables, so the defaults are
//! the only source; the structs stay serde-round-trippable all the same.

use serde::{Deserialize, Serialize};

use crate::signal::{GaussianParams, LifNeuron, ToneComponent};

/// Complete fixture configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureConfig {
    pub trace: TraceConfig,
    pub trials: TrialConfig,
    pub spectrum: SpectrumConfig,
    pub grid: GridConfig,
    pub image: ImageConfig,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            trace: TraceConfig::default(),
            trials: TrialConfig::default(),
            spectrum: SpectrumConfig::default(),
            grid: GridConfig::default(),
            image: ImageConfig::default(),
        }
    }
}

/// The two-component discharge trace and everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceConfig {
    /// Sampling interval in seconds.
    pub sample_interval: f64,
    /// Trace duration in seconds.
    pub duration: f64,
    pub components: Vec<ToneComponent>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            sample_interval: 5e-5,
            duration: 0.5,
            components: vec![
                ToneComponent {
                    frequency_hz: 100.0,
                    amplitude: 0.825,
                },
                ToneComponent {
                    frequency_hz: 200.0,
                    amplitude: 0.4,
                },
            ],
        }
    }
}

/// Repeated model-neuron trials for the 2-D stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialConfig {
    pub count: usize,
    /// Samples per trial.
    pub steps: usize,
    /// Constant stimulus current fed to every trial.
    pub stimulus: f64,
    pub neuron: LifNeuron,
    /// Base value for the per-trial seeds.
    pub seed: u64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            count: 10,
            steps: 10_000,
            stimulus: 0.005,
            neuron: LifNeuron::default(),
            seed: 0x5A5A_0001,
        }
    }
}

/// Welch estimation parameters for the power-spectrum feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpectrumConfig {
    pub segment_len: usize,
    pub overlap: usize,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            segment_len: 4_096,
            overlap: 2_048,
        }
    }
}

/// Regular grid and density parameters for the 2-D heatmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    pub min: f64,
    pub max: f64,
    pub delta: f64,
    pub first: GaussianParams,
    pub second: GaussianParams,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min: -3.0,
            max: 3.0,
            delta: 0.025,
            first: GaussianParams {
                sigma_x: 1.0,
                sigma_y: 1.0,
                mu_x: 0.0,
                mu_y: 0.0,
            },
            second: GaussianParams {
                sigma_x: 1.5,
                sigma_y: 0.5,
                mu_x: 1.0,
                mu_y: 1.0,
            },
        }
    }
}

/// Reference image asset consumed by the 3-D routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    pub file_name: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            file_name: "lena.bmp".to_string(),
        }
    }
}
