// Bivariate Gaussian fields on a regular grid

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Parameters of one axis-aligned bivariate Gaussian density.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GaussianParams {
    pub sigma_x: f64,
    pub sigma_y: f64,
    pub mu_x: f64,
    pub mu_y: f64,
}

impl GaussianParams {
    fn density(&self, x: f64, y: f64) -> f64 {
        let zx = (x - self.mu_x) / self.sigma_x;
        let zy = (y - self.mu_y) / self.sigma_y;
        (-0.5 * (zx * zx + zy * zy)).exp()
            / (2.0 * std::f64::consts::PI * self.sigma_x * self.sigma_y)
    }
}

/// Evaluate `second - first` over the square grid `[min, max)` with step
/// `delta` on both axes. Rows follow the y axis, columns the x axis.
pub fn difference_of_gaussians(
    min: f64,
    max: f64,
    delta: f64,
    first: GaussianParams,
    second: GaussianParams,
) -> Array2<f64> {
    let ticks: Vec<f64> = grid(min, max, delta);
    let n = ticks.len();
    Array2::from_shape_fn((n, n), |(row, col)| {
        let x = ticks[col];
        let y = ticks[row];
        second.density(x, y) - first.density(x, y)
    })
}

fn grid(min: f64, max: f64, delta: f64) -> Vec<f64> {
    let count = ((max - min) / delta).round() as usize;
    (0..count).map(|i| min + i as f64 * delta).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTERED: GaussianParams = GaussianParams {
        sigma_x: 1.0,
        sigma_y: 1.0,
        mu_x: 0.0,
        mu_y: 0.0,
    };
    const SHIFTED: GaussianParams = GaussianParams {
        sigma_x: 1.5,
        sigma_y: 0.5,
        mu_x: 1.0,
        mu_y: 1.0,
    };

    #[test]
    fn grid_shape_matches_the_step() {
        let field = difference_of_gaussians(-3.0, 3.0, 0.025, CENTERED, SHIFTED);
        assert_eq!(field.dim(), (240, 240));
    }

    #[test]
    fn field_has_both_signs() {
        let field = difference_of_gaussians(-3.0, 3.0, 0.025, CENTERED, SHIFTED);
        assert!(field.iter().any(|&v| v > 0.0));
        assert!(field.iter().any(|&v| v < 0.0));
    }

    #[test]
    fn signs_follow_the_two_density_centers() {
        // grid point (120, 120) is (0, 0); (160, 160) is (1, 1)
        let field = difference_of_gaussians(-3.0, 3.0, 0.025, CENTERED, SHIFTED);
        assert!(field[(120, 120)] < 0.0, "first density dominates its center");
        assert!(field[(160, 160)] > 0.0, "second density dominates its center");
    }
}
