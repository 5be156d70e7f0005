// 1-D routines: the regularly sampled discharge trace and the irregular
// zero-crossing events derived from it.

use log::debug;

use crate::config::TraceConfig;
use crate::error::VaultError;
use crate::model::{Block, DataArray, Dimension, SampledDimension, Section, Source};
use crate::signal;

/// Synthesize the two-component discharge trace, attach its time axis,
/// and hang the recording-hardware and subject provenance off the block.
pub fn sampled_trace(
    block: &mut Block,
    sections: &mut Vec<Section>,
    config: &TraceConfig,
) -> Result<(), VaultError> {
    let trace = signal::multi_tone(&config.components, config.duration, config.sample_interval);
    debug!("[Builder] Synthesized discharge trace, {} samples", trace.len());

    let eod = DataArray::vector("eod", "nix.regular_sampled", trace)
        .with_definition(
            "Recording of an electric fish's electric organ discharge. Demonstrates \
             the use of DataArrays to store 1-D data that is regularly sampled in \
             time. The DataArray contains one dimension descriptor that defines how \
             the time-axis is resolved.",
        )
        .with_unit("mV/cm")
        .with_label("electric field")
        .with_dimension(
            SampledDimension::new(config.sample_interval)
                .with_unit("s")
                .with_label("time"),
        );
    block.data_arrays.push(eod);

    sections.push(
        Section::new("in vivo 1", "setup").with_child(
            Section::new("amplifier", "hardware.amplifier")
                .with_property("model", "EXT 2F")
                .with_property("manufacturer", "npi electronics")
                .with_property("gain", 1000_i64),
        ),
    );
    sections.push(
        Section::new("2015_albi_10", "subject.animal")
            .with_property("species", "Apteronotus albifrons")
            .with_property("sex", "male"),
    );

    block
        .sources
        .push(Source::new("setup", "nix.source.setup").with_metadata("in vivo 1"));
    block
        .sources
        .push(Source::new("subject", "nix.source.subject").with_metadata("2015_albi_10"));

    Ok(())
}

/// Detect upward zero crossings of the stored trace and keep their
/// timestamps as a self-describing (alias range) event array.
pub fn crossing_events(block: &mut Block) -> Result<(), VaultError> {
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
        let interval = sampled_interval(eod)?;
        (samples, interval)
    };

    let crossings = signal::zero_crossings(&samples, interval);
    debug!("[Builder] Detected {} zero crossings", crossings.len());

    let events = DataArray::vector("zero crossings", "nix.event", crossings)
        .with_definition(
            "1-D data that is irregularly sampled in time. That is, the time between \
             consecutive sampling points is not regular. Here we store the times at \
             which a signal crossed the zero line. The content of the DataArray \
             itself defines the time-axis, the only dimension descriptor is thus an \
             \"aliasRange\" dimension.",
        )
        .with_dimension(Dimension::alias_range().with_unit("s").with_label("time"));
    block.data_arrays.push(events);

    Ok(())
}

/// Interval of an array's leading sampled axis.
pub(crate) fn sampled_interval(array: &DataArray) -> Result<f64, VaultError> {
    match array.dimensions.first() {
        Some(Dimension::Sampled(dim)) => Ok(dim.interval),
        Some(other) => Err(VaultError::InvalidDescriptor {
            array: array.name.clone(),
            detail: format!(
                "expected a sampled leading axis, found {}",
                other.kind_name()
            ),
        }),
        None => Err(VaultError::InvalidDescriptor {
            array: array.name.clone(),
            detail: "expected a sampled leading axis, found none".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_block() -> (Block, Vec<Section>) {
        let mut block = Block::new("1D data", "nix.recording_session");
        let mut sections = Vec::new();
        sampled_trace(&mut block, &mut sections, &TraceConfig::default()).unwrap();
        (block, sections)
    }

    #[test]
    fn trace_has_expected_length_and_axis() {
        let (block, _) = built_block();
        let eod = block.data_array("eod").unwrap();
        assert_eq!(eod.len(), 10_000);
        assert_eq!(sampled_interval(eod).unwrap(), 5e-5);
    }

    #[test]
    fn provenance_sections_and_sources_line_up() {
        let (block, sections) = built_block();
        assert!(sections.iter().any(|s| s.name == "in vivo 1"));
        assert!(sections.iter().any(|s| s.name == "2015_albi_10"));
        assert_eq!(
            block.source("setup").unwrap().metadata.as_deref(),
            Some("in vivo 1")
        );
        assert_eq!(
            block.source("subject").unwrap().metadata.as_deref(),
            Some("2015_albi_10")
        );
        // amplifier details live one level down
        let setup = sections.iter().find(|s| s.name == "in vivo 1").unwrap();
        assert!(setup.find("amplifier").is_some());
    }

    #[test]
    fn crossings_require_the_trace() {
        let mut empty = Block::new("empty", "nix.recording_session");
        assert!(matches!(
            crossing_events(&mut empty),
            Err(VaultError::MissingEntity { .. })
        ));
    }

    #[test]
    fn crossings_are_self_describing() {
        let (mut block, _) = built_block();
        crossing_events(&mut block).unwrap();
        let events = block.data_array("zero crossings").unwrap();
        assert_eq!(events.dimensions.len(), 1);
        assert!(matches!(events.dimensions[0], Dimension::AliasRange(_)));
        events.validate().unwrap();
        let values = events.data.as_doubles().unwrap();
        assert!(values.iter().all(|&t| (0.0..0.5).contains(&t)));
    }
}
