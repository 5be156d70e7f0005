// 2-D trial stack: repeated model-neuron runs plus their average

use log::debug;
use ndarray::{Array2, Axis};

use crate::config::TrialConfig;
use crate::error::VaultError;
use crate::model::{Block, DataArray, Dimension, LinkType, SampledDimension, Tag};

/// Run the model neuron once per trial under a constant stimulus, stack
/// the voltage traces time x trial, store the cross-trial mean, and tag
/// the full duration with the mean linked as an untagged feature.
pub fn membrane_trials(block: &mut Block, config: &TrialConfig) -> Result<(), VaultError> {
    let traces: Vec<_> = (0..config.count)
        .map(|trial| {
            config
                .neuron
                .run_const_stim(config.steps, config.stimulus, config.seed + trial as u64)
        })
        .collect();
    debug!(
        "[Builder] Simulated {} trials of {} samples",
        config.count, config.steps
    );

    let stack = Array2::from_shape_fn((config.steps, config.count), |(i, trial)| {
        traces[trial].voltage[i]
    });
    let mean = stack.sum_axis(Axis(1)) / config.count as f64;
    let stepsize = config.neuron.stepsize;

    let voltages = DataArray::from_doubles(
        "membrane voltages",
        "nix.regular_sampled.series",
        vec![config.steps, config.count],
        stack.into_raw_vec(),
    )
    .with_label("voltage")
    .with_unit("mV")
    .with_dimension(
        SampledDimension::new(stepsize)
            .with_label("time")
            .with_unit("s"),
    )
    .with_dimension(Dimension::set_empty());
    block.data_arrays.push(voltages);

    let average = DataArray::vector("average response", "nix.regular_sampled", mean.to_vec())
        .with_label("voltage")
        .with_unit("mV")
        .with_dimension(
            SampledDimension::new(stepsize)
                .with_unit("s")
                .with_label("time"),
        );
    block.data_arrays.push(average);

    let last_time = (config.steps - 1) as f64 * stepsize;
    block.tags.push(
        Tag::new("average response", "nix.epoch", vec![0.0])
            .with_extent(vec![last_time])
            .with_definition(
                "Average response of the model neuron. The original responses are \
                 referenced and the average response is linked as a feature of these.",
            )
            .with_reference("membrane voltages")
            .with_feature("average response", LinkType::Untagged),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_block() -> Block {
        let mut block = Block::new("2D data", "nix.recording_session");
        membrane_trials(&mut block, &TrialConfig::default()).unwrap();
        block
    }

    #[test]
    fn stack_is_time_by_trial() {
        let block = built_block();
        let stack = block.data_array("membrane voltages").unwrap();
        assert_eq!(stack.shape, vec![10_000, 10]);
        assert_eq!(stack.dimensions.len(), 2);
        assert!(matches!(stack.dimensions[0], Dimension::Sampled(_)));
        assert!(matches!(stack.dimensions[1], Dimension::Set(_)));
    }

    #[test]
    fn average_is_the_elementwise_mean() {
        let block = built_block();
        let stack = block.data_array("membrane voltages").unwrap();
        let average = block.data_array("average response").unwrap();
        let values = stack.data.as_doubles().unwrap();
        let mean = average.data.as_doubles().unwrap();
        assert_eq!(mean.len(), 10_000);

        let trials = stack.shape[1];
        for (i, &m) in mean.iter().enumerate() {
            let row = &values[i * trials..(i + 1) * trials];
            let expected: f64 = row.iter().sum::<f64>() / trials as f64;
            assert!((m - expected).abs() < 1e-9, "row {} mean off", i);
        }
    }

    #[test]
    fn tag_spans_the_full_duration() {
        let block = built_block();
        let tag = block.tag("average response").unwrap();
        assert_eq!(tag.position, vec![0.0]);
        let extent = tag.extent.as_ref().unwrap();
        assert!((extent[0] - 0.9999).abs() < 1e-12);
        assert_eq!(tag.references, vec!["membrane voltages"]);
        assert_eq!(tag.features.len(), 1);
        assert_eq!(tag.features[0].link_type, LinkType::Untagged);
        tag.validate(&block).unwrap();
    }
}
