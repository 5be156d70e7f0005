// Leaky integrate-and-fire model neuron
//
// Euler-integrated membrane equation with a Gaussian noise term and an
// absolute refractory period. Each run takes an explicit seed, so trials
// differ from each other but any trial reproduces bit-for-bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Model parameters. Defaults fire at roughly 40 Hz under the fixture's
/// constant stimulus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LifNeuron {
    /// Integration step in seconds.
    pub stepsize: f64,
    /// Constant bias current driving the membrane.
    pub offset: f64,
    /// Membrane time constant in seconds.
    pub tau_m: f64,
    /// Absolute refractory period in seconds.
    pub tau_ref: f64,
    pub v_reset: f64,
    pub v_threshold: f64,
    /// Diffusion strength of the noise term.
    pub noise_strength: f64,
}

impl Default for LifNeuron {
    fn default() -> Self {
        Self {
            stepsize: 1e-4,
            offset: 1.6,
            tau_m: 0.025,
            tau_ref: 0.003,
            v_reset: 0.0,
            v_threshold: 1.0,
            noise_strength: 0.05,
        }
    }
}

/// One simulated trial.
#[derive(Debug, Clone, PartialEq)]
pub struct LifTrace {
    pub time: Vec<f64>,
    pub voltage: Vec<f64>,
    pub spike_times: Vec<f64>,
}

impl LifNeuron {
    /// Integrate `steps` samples under a constant stimulus current.
    pub fn run_const_stim(&self, steps: usize, stimulus: f64, seed: u64) -> LifTrace {
        let mut rng = StdRng::seed_from_u64(seed);
        let dt = self.stepsize;
        let noise_scale = (2.0 * self.noise_strength * dt).sqrt();

        let mut time = Vec::with_capacity(steps);
        let mut voltage = Vec::with_capacity(steps);
        let mut spike_times = Vec::new();
        let mut v = self.v_reset;
        let mut last_spike: Option<f64> = None;

        for i in 0..steps {
            let t = i as f64 * dt;
            let refractory = last_spike.is_some_and(|s| t - s < self.tau_ref);
            if refractory {
                v = self.v_reset;
            } else {
                let xi: f64 = rng.sample(StandardNormal);
                v += dt * (self.offset + stimulus - v) / self.tau_m + noise_scale * xi;
                if v >= self.v_threshold {
                    v = self.v_reset;
                    spike_times.push(t);
                    last_spike = Some(t);
                }
            }
            time.push(t);
            voltage.push(v);
        }

        LifTrace {
            time,
            voltage,
            spike_times,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_trial() {
        let neuron = LifNeuron::default();
        let a = neuron.run_const_stim(2_000, 0.005, 7);
        let b = neuron.run_const_stim(2_000, 0.005, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let neuron = LifNeuron::default();
        let a = neuron.run_const_stim(2_000, 0.005, 1);
        let b = neuron.run_const_stim(2_000, 0.005, 2);
        assert_ne!(a.voltage, b.voltage);
    }

    #[test]
    fn trace_covers_the_requested_grid() {
        let neuron = LifNeuron::default();
        let trace = neuron.run_const_stim(10_000, 0.005, 0);
        assert_eq!(trace.time.len(), 10_000);
        assert_eq!(trace.voltage.len(), 10_000);
        let dt = trace.time[1] - trace.time[0];
        assert!((dt - neuron.stepsize).abs() < 1e-15);
    }

    #[test]
    fn suprathreshold_drive_produces_ordered_spikes() {
        let neuron = LifNeuron::default();
        let trace = neuron.run_const_stim(10_000, 0.005, 3);
        assert!(
            !trace.spike_times.is_empty(),
            "drive above threshold must spike within a second"
        );
        assert!(trace.spike_times.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(trace
            .voltage
            .iter()
            .all(|&v| v <= neuron.v_threshold + 1e-9));
    }
}
