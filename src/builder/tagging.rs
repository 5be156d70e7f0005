// Tagging routines over the 1-D trace: event multi-tags with tone-burst
// features, the spectral epoch tag, and the bare point tag.

use log::debug;

use crate::builder::oned::sampled_interval;
use crate::config::{SpectrumConfig, TraceConfig};
use crate::error::VaultError;
use crate::model::{Block, DataArray, Dimension, LinkType, MultiTag, SampledDimension, Tag};
use crate::signal::{self, BurstPhase};

fn require_array(block: &Block, name: &str) -> Result<(), VaultError> {
    if block.data_array(name).is_none() {
        return Err(VaultError::MissingEntity {
            kind: "data array",
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Multi-instance annotations over the stored trace: the zero-crossing
/// event times marking points in the discharge, and two literal epochs
/// carrying synthesized tone-burst features.
pub fn event_multi_tags(block: &mut Block, config: &TraceConfig) -> Result<(), VaultError> {
    require_array(block, "eod")?;
    require_array(block, "zero crossings")?;

    block.multi_tags.push(
        MultiTag::new("special events", "nix.event_times", "zero crossings")
            .with_definition(
                "A MultiTag entity is used to annotate multiple events or segments in \
                 a number of referenced DataArrays. In this example, the events are \
                 the zero crossings (see 1-D DataArrays) in the EOD. Thus, the one \
                 DataArray (zero crossings) is used to mark the time points in the \
                 other (EOD).",
            )
            .with_reference("eod"),
    );

    let starts = DataArray::vector("epoch_starts", "nix.event", vec![0.05, 0.35])
        .with_dimension(Dimension::set_empty());
    block.data_arrays.push(starts);
    let ends = DataArray::vector("epoch_ends", "nix.event", vec![0.1, 0.1])
        .with_dimension(Dimension::set_empty());
    block.data_arrays.push(ends);

    let burst_duration = 0.1;
    for (name, frequency_hz, phase) in [
        ("feature 1", 100.0, BurstPhase::Sine),
        ("feature 2", 150.0, BurstPhase::Cosine),
    ] {
        let burst = signal::tone_burst(
            frequency_hz,
            burst_duration,
            config.sample_interval,
            phase,
        );
        let feature = DataArray::vector(name, "nix.feature", burst)
            .with_unit("mV")
            .with_label("voltage")
            .with_dimension(
                SampledDimension::new(config.sample_interval)
                    .with_unit("s")
                    .with_label("time"),
            );
        block.data_arrays.push(feature);
    }

    block.multi_tags.push(
        MultiTag::new("epochs", "nix.event_epochs", "epoch_starts")
            .with_extents("epoch_ends")
            .with_reference("eod")
            .with_feature("feature 1", LinkType::Untagged)
            .with_feature("feature 2", LinkType::Untagged),
    );
    debug!("[Builder] Tagged events and epochs over the discharge trace");

    Ok(())
}

/// Welch spectrum of the trace stored as an untagged feature of an epoch
/// tag over the analyzed region.
pub fn spectrum_tag(block: &mut Block, config: &SpectrumConfig) -> Result<(), VaultError> {
    let (samples, interval) = {
        let eod = block
            .data_array("eod")
            .ok_or_else(|| VaultError::MissingEntity {
                kind: "data array",
                name: "eod".to_string(),
            })?;
        let samples = eod
            .data
            .as_doubles()
            .ok_or_else(|| VaultError::MissingEntity {
                kind: "numeric data array",
                name: "eod".to_string(),
            })?
            .to_vec();
        (samples, sampled_interval(eod)?)
    };

    let spectrum = signal::psd_twosided(
        &samples,
        1.0 / interval,
        config.segment_len,
        config.overlap,
    );
    debug!(
        "[Builder] Estimated {}-bin power spectrum",
        spectrum.power.len()
    );

    let offset = spectrum.frequencies[0];
    let bin_width = spectrum.bin_width();
    let power = DataArray::vector("power spectrum", "nix.sampled.spectrum.psd", spectrum.power)
        .with_label("power")
        .with_unit("mV^2/cm^2*Hz^-1")
        .with_dimension(
            SampledDimension::new(bin_width)
                .with_offset(offset)
                .with_label("frequency")
                .with_unit("Hz"),
        );
    block.data_arrays.push(power);

    block.tags.push(
        Tag::new("interesting epoch", "nix.epoch", vec![0.1])
            .with_extent(vec![0.3])
            .with_definition(
                "This tag tags a region in the referenced DataArray (EOD). One \
                 feature of the referenced epoch, or region, is the power spectrum \
                 of the EOD signal in that region.",
            )
            .with_reference("eod")
            .with_feature("power spectrum", LinkType::Untagged),
    );

    Ok(())
}

/// Single-point annotation in the trace, no extent, no feature.
pub fn point_tag(block: &mut Block) -> Result<(), VaultError> {
    require_array(block, "eod")?;
    block
        .tags
        .push(Tag::new("interesting point", "nix.point", vec![0.05]).with_reference("eod"));
    Ok(())
}
