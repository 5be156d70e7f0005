// Waveform synthesis and event extraction
//
// Direct evaluation of tone sums and bursts on a regular time grid, plus
// positive-going zero-crossing detection over a sampled trace.

use serde::{Deserialize, Serialize};

/// One sinusoidal component of a compound trace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ToneComponent {
    pub frequency_hz: f64,
    pub amplitude: f64,
}

/// Starting phase of a tone burst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BurstPhase {
    Sine,
    Cosine,
}

/// Number of samples on a regular grid covering `duration` at `interval`.
pub fn sample_count(duration: f64, interval: f64) -> usize {
    (duration / interval).round() as usize
}

/// Sum of sine components evaluated over `[0, duration)` at `interval`.
pub fn multi_tone(components: &[ToneComponent], duration: f64, interval: f64) -> Vec<f64> {
    let n = sample_count(duration, interval);
    (0..n)
        .map(|i| {
            let t = i as f64 * interval;
            components
                .iter()
                .map(|c| c.amplitude * (2.0 * std::f64::consts::PI * c.frequency_hz * t).sin())
                .sum()
        })
        .collect()
}

/// Unit-amplitude sine or cosine burst over `[0, duration)` at `interval`.
pub fn tone_burst(
    frequency_hz: f64,
    duration: f64,
    interval: f64,
    phase: BurstPhase,
) -> Vec<f64> {
    let n = sample_count(duration, interval);
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * frequency_hz * i as f64 * interval;
            match phase {
                BurstPhase::Sine => angle.sin(),
                BurstPhase::Cosine => angle.cos(),
            }
        })
        .collect()
}

/// Timestamps where the trace crosses zero upward: the previous sample is
/// below zero and the current one above. Returned times lie on the sampling
/// grid and are strictly increasing.
pub fn zero_crossings(samples: &[f64], interval: f64) -> Vec<f64> {
    samples
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < 0.0 && pair[1] > 0.0)
        .map(|(i, _)| (i + 1) as f64 * interval)
        .collect()
}
