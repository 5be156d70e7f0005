// 2-D sampled heatmap: difference of two Gaussian densities on a grid

use log::debug;

use crate::config::GridConfig;
use crate::error::VaultError;
use crate::model::{Block, DataArray, SampledDimension};
use crate::signal;

/// Evaluate the density difference over the configured grid and store it
/// with two offset sampled dimensions.
pub fn gaussian_heatmap(block: &mut Block, config: &GridConfig) -> Result<(), VaultError> {
    let field = signal::difference_of_gaussians(
        config.min,
        config.max,
        config.delta,
        config.first,
        config.second,
    );
    let (rows, cols) = field.dim();
    debug!("[Builder] Evaluated {}x{} density grid", rows, cols);

    let heatmap = DataArray::from_doubles(
        "difference of Gaussians",
        "nix.2d.heatmap",
        vec![rows, cols],
        field.into_raw_vec(),
    )
    .with_dimension(
        SampledDimension::new(config.delta)
            .with_offset(config.min)
            .with_label("x"),
    )
    .with_dimension(
        SampledDimension::new(config.delta)
            .with_offset(config.min)
            .with_label("y"),
    );
    block.data_arrays.push(heatmap);

    Ok(())
}
