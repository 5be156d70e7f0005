// Container: the top-level persisted object graph

use serde::{Deserialize, Serialize};

use crate::error::VaultError;
use crate::model::section::find_section;
use crate::model::{Block, Section};

/// Version written into every persisted document.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level object graph: metadata sections plus data blocks. Persisted
/// as one document by [`crate::store::ContainerFile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Container {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            version: FORMAT_VERSION,
            sections: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.name == name)
    }

    pub fn block_mut(&mut self, name: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.name == name)
    }

    /// Depth-first lookup through the metadata forest.
    pub fn section(&self, name: &str) -> Option<&Section> {
        find_section(&self.sections, name)
    }

    /// Validate the full graph: every array, every link, every region.
    pub fn validate(&self) -> Result<(), VaultError> {
        for block in &self.blocks {
            block.validate(&self.sections)?;
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    FORMAT_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataArray, Dimension, SampledDimension, Tag};

    #[test]
    fn empty_container_is_valid() {
        Container::new().validate().unwrap();
    }

    #[test]
    fn validation_reaches_into_blocks() {
        let mut container = Container::new();
        let mut block = Block::new("data", "recording");
        // descriptor count (0) will not match rank (1)
        block
            .data_arrays
            .push(DataArray::vector("bad", "signal", vec![1.0, 2.0]));
        container.blocks.push(block);
        assert!(matches!(
            container.validate(),
            Err(VaultError::DimensionCount { .. })
        ));
    }

    #[test]
    fn validation_covers_tag_regions() {
        let mut container = Container::new();
        let mut block = Block::new("data", "recording");
        block.data_arrays.push(
            DataArray::vector("trace", "signal", vec![0.0; 10])
                .with_dimension(SampledDimension::new(0.1)),
        );
        block
            .tags
            .push(Tag::new("way out", "point", vec![5.0]).with_reference("trace"));
        container.blocks.push(block);
        assert!(matches!(
            container.validate(),
            Err(VaultError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn section_lookup_descends_the_forest() {
        let mut container = Container::new();
        container.sections.push(
            Section::new("session", "recording")
                .with_child(Section::new("amplifier", "hardware")),
        );
        assert!(container.section("amplifier").is_some());
        assert!(container.section("oscilloscope").is_none());
    }

    #[test]
    fn graph_survives_json_round_trip() {
        let mut container = Container::new();
        let mut block = Block::new("data", "recording");
        block.data_arrays.push(
            DataArray::vector("trace", "signal", vec![0.25, -0.5, 1.0])
                .with_dimension(SampledDimension::new(0.1).with_label("time").with_unit("s"))
                .with_label("voltage"),
        );
        block.data_arrays.push(
            DataArray::vector("months", "categorical", vec![1.0, 2.0])
                .with_dimension(Dimension::set(vec!["Jan".to_string(), "Feb".to_string()])),
        );
        container.blocks.push(block);

        let json = serde_json::to_string_pretty(&container).unwrap();
        let back: Container = serde_json::from_str(&json).unwrap();
        assert_eq!(back, container);
    }
}
