//! Fixture builder: populates a fresh container with the demonstration
//! entities, one generation routine per dimension/tagging kind.
//!
//! The driver is a flat sequence with a fixed order. The only ordering
//! constraint between routines is data flow: later routines look up
//! arrays and sources created by earlier ones and fail hard when a
//! prerequisite is missing.

pub mod categorical;
pub mod heatmap;
pub mod imagery;
pub mod oned;
pub mod tagging;
pub mod trials;

use std::path::Path;

use log::info;

use crate::config::FixtureConfig;
use crate::error::VaultError;
use crate::model::{Block, Container, Section};
use crate::store::ContainerFile;

/// Build the full demonstration graph into `container`.
pub fn populate(container: &mut Container, config: &FixtureConfig) -> Result<(), VaultError> {
    container.sections.push(
        Section::new("Recording session", "recording")
            .with_property("date", "2015-10-21")
            .with_property("experimenter", "John Doe"),
    );

    info!("[Builder] Populating block '1D data'");
    let mut one_d = Block::new("1D data", "nix.recording_session")
        .with_definition(
            "This Block contains 1D datasets and links between them. These datasets \
             show the use of regularly sampled and irregularly sampled (range) dimensions.",
        )
        .with_metadata("Recording session");
    oned::sampled_trace(&mut one_d, &mut container.sections, &config.trace)?;
    oned::crossing_events(&mut one_d)?;
    tagging::event_multi_tags(&mut one_d, &config.trace)?;
    tagging::spectrum_tag(&mut one_d, &config.spectrum)?;
    tagging::point_tag(&mut one_d)?;
    container.blocks.push(one_d);

    info!("[Builder] Populating block 'Categorical data'");
    let mut categorical_block = Block::new("Categorical data", "nix.analysis_session")
        .with_definition(
            "This Block contains categorical data demonstrating the use of SetDimensions.",
        );
    let weather_source =
        categorical::monthly_temperatures(&mut categorical_block, &mut container.sections)?;
    categorical::temperature_matrix(&mut categorical_block, &weather_source)?;
    container.blocks.push(categorical_block);

    container.sections.push(
        Section::new("Lif recording", "recording")
            .with_property("date", "2015-10-21")
            .with_property("experimenter", "John Doe")
            .with_property("neuron", "Leaky integrate and fire neuron"),
    );

    info!("[Builder] Populating block '2D data'");
    let mut two_d = Block::new("2D data", "nix.recording_session")
        .with_definition("2-dimensional datasets e.g. for storing multiple time-series or image data.")
        .with_metadata("Lif recording");
    trials::membrane_trials(&mut two_d, &config.trials)?;
    heatmap::gaussian_heatmap(&mut two_d, &config.grid)?;
    container.blocks.push(two_d);

    info!("[Builder] Populating block '3D data'");
    let mut three_d = Block::new("3D data", "nix.image_data")
        .with_definition("3-D datasets like RGB image data and links into such datasets.")
        .with_metadata("Recording session");
    imagery::rgb_image(&mut three_d, &config.image)?;
    imagery::roi_multi_tag(&mut three_d)?;
    container.blocks.push(three_d);

    Ok(())
}

/// Create the container file at `path` (overwriting), populate it, and
/// close it. On a generation error the partially built graph is still
/// flushed by the handle's drop path.
pub fn write_fixture(path: &Path, config: &FixtureConfig) -> Result<(), VaultError> {
    let mut file = ContainerFile::create(path)?;
    populate(file.container_mut(), config)?;
    file.close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_creates_the_block_roster_in_order() {
        let mut container = Container::new();
        populate(&mut container, &FixtureConfig::default()).unwrap();
        let names: Vec<&str> = container
            .blocks
            .iter()
            .map(|block| block.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["1D data", "Categorical data", "2D data", "3D data"]
        );
    }

    #[test]
    fn populated_graph_validates() {
        let mut container = Container::new();
        populate(&mut container, &FixtureConfig::default()).unwrap();
        container.validate().unwrap();
    }

    #[test]
    fn block_metadata_links_resolve() {
        let mut container = Container::new();
        populate(&mut container, &FixtureConfig::default()).unwrap();
        for name in ["1D data", "2D data", "3D data"] {
            let block = container.block(name).unwrap();
            let section = block.metadata.as_deref().unwrap();
            assert!(container.section(section).is_some(), "{}", section);
        }
    }
}
