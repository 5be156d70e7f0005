// Welch power spectral density estimation
//
// Averaged periodogram over Hann-windowed, overlapping segments. The
// two-sided result is centered: frequencies run from -Fs/2 upward in
// steps of Fs/segment_len.

use rustfft::{num_complex::Complex, FftPlanner};

/// Two-sided PSD with its frequency axis, both of length `segment_len`.
#[derive(Debug, Clone, PartialEq)]
pub struct WelchSpectrum {
    pub power: Vec<f64>,
    pub frequencies: Vec<f64>,
}

impl WelchSpectrum {
    /// Spacing of the frequency axis.
    pub fn bin_width(&self) -> f64 {
        self.frequencies[1] - self.frequencies[0]
    }
}

/// Estimate the two-sided PSD of `samples` at `sample_rate`.
///
/// Segments of `segment_len` samples advance by `segment_len - overlap`;
/// a trace shorter than one segment is zero-padded into a single one.
pub fn psd_twosided(
    samples: &[f64],
    sample_rate: f64,
    segment_len: usize,
    overlap: usize,
) -> WelchSpectrum {
    let window = hann(segment_len);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let step = segment_len.saturating_sub(overlap).max(1);

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(segment_len);

    let mut accumulated = vec![0.0_f64; segment_len];
    let mut segments = 0usize;
    let mut start = 0usize;
    while start + segment_len <= samples.len() {
        let mut buffer: Vec<Complex<f64>> = samples[start..start + segment_len]
            .iter()
            .zip(&window)
            .map(|(&sample, &w)| Complex::new(sample * w, 0.0))
            .collect();
        fft.process(&mut buffer);
        for (acc, bin) in accumulated.iter_mut().zip(&buffer) {
            *acc += bin.norm_sqr();
        }
        segments += 1;
        start += step;
    }

    if segments == 0 {
        // Short trace: zero-pad into one segment.
        let mut buffer: Vec<Complex<f64>> = (0..segment_len)
            .map(|i| {
                let sample = samples.get(i).copied().unwrap_or(0.0);
                Complex::new(sample * window[i], 0.0)
            })
            .collect();
        fft.process(&mut buffer);
        for (acc, bin) in accumulated.iter_mut().zip(&buffer) {
            *acc += bin.norm_sqr();
        }
        segments = 1;
    }

    let scale = 1.0 / (sample_rate * window_power * segments as f64);
    let half = segment_len / 2;
    let bin_width = sample_rate / segment_len as f64;

    // Center the spectrum: bin k of the shifted output is FFT bin (k + half) % n.
    let power: Vec<f64> = (0..segment_len)
        .map(|k| accumulated[(k + half) % segment_len] * scale)
        .collect();
    let frequencies: Vec<f64> = (0..segment_len)
        .map(|k| (k as f64 - half as f64) * bin_width)
        .collect();

    WelchSpectrum { power, frequencies }
}

fn hann(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            0.5 * (1.0
                - (2.0 * std::f64::consts::PI * i as f64 / (len as f64 - 1.0)).cos())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{multi_tone, ToneComponent};

    #[test]
    fn output_length_matches_segment_len() {
        let trace = multi_tone(
            &[ToneComponent {
                frequency_hz: 100.0,
                amplitude: 1.0,
            }],
            0.5,
            5e-5,
        );
        let spectrum = psd_twosided(&trace, 20_000.0, 4_096, 2_048);
        assert_eq!(spectrum.power.len(), 4_096);
        assert_eq!(spectrum.frequencies.len(), 4_096);
    }

    #[test]
    fn frequency_axis_is_centered_and_regular() {
        let trace = vec![0.0; 8_192];
        let spectrum = psd_twosided(&trace, 20_000.0, 4_096, 2_048);
        assert_eq!(spectrum.frequencies[0], -10_000.0);
        assert_eq!(spectrum.frequencies[2_048], 0.0);
        let df = spectrum.bin_width();
        assert!((df - 20_000.0 / 4_096.0).abs() < 1e-9);
        assert!(spectrum
            .frequencies
            .windows(2)
            .all(|pair| (pair[1] - pair[0] - df).abs() < 1e-9));
    }

    #[test]
    fn dominant_bin_sits_at_the_tone_frequency() {
        let trace = multi_tone(
            &[ToneComponent {
                frequency_hz: 100.0,
                amplitude: 1.0,
            }],
            0.5,
            5e-5,
        );
        let spectrum = psd_twosided(&trace, 20_000.0, 4_096, 2_048);
        let (peak_bin, _) = spectrum
            .power
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        let peak_freq = spectrum.frequencies[peak_bin].abs();
        let df = spectrum.bin_width();
        assert!(
            (peak_freq - 100.0).abs() <= df,
            "peak at {} Hz, expected about 100 Hz",
            peak_freq
        );
    }

    #[test]
    fn short_trace_is_padded_into_one_segment() {
        let trace = vec![1.0; 100];
        let spectrum = psd_twosided(&trace, 1_000.0, 256, 128);
        assert_eq!(spectrum.power.len(), 256);
        assert!(spectrum.power.iter().any(|&p| p > 0.0));
    }
}
