// Block: named grouping of data arrays, tags, and sources

use serde::{Deserialize, Serialize};

use crate::error::VaultError;
use crate::model::section::find_section;
use crate::model::{DataArray, MultiTag, Section, Source, Tag};

/// Named grouping of related entities inside a container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Name of the metadata section attached to this block, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default)]
    pub data_arrays: Vec<DataArray>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multi_tags: Vec<MultiTag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl Block {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            definition: None,
            metadata: None,
            data_arrays: Vec::new(),
            tags: Vec::new(),
            multi_tags: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_metadata(mut self, section: impl Into<String>) -> Self {
        self.metadata = Some(section.into());
        self
    }

    pub fn data_array(&self, name: &str) -> Option<&DataArray> {
        self.data_arrays.iter().find(|array| array.name == name)
    }

    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|source| source.name == name)
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    pub fn multi_tag(&self, name: &str) -> Option<&MultiTag> {
        self.multi_tags.iter().find(|tag| tag.name == name)
    }

    /// Validate everything owned by this block. `sections` is the
    /// container's metadata forest, used to resolve metadata links.
    pub fn validate(&self, sections: &[Section]) -> Result<(), VaultError> {
        if let Some(metadata) = &self.metadata {
            resolve_section(sections, metadata)?;
        }

        for source in &self.sources {
            if let Some(metadata) = &source.metadata {
                resolve_section(sections, metadata)?;
            }
        }

        for array in &self.data_arrays {
            array.validate()?;
            for source in &array.sources {
                if self.source(source).is_none() {
                    return Err(VaultError::MissingEntity {
                        kind: "source",
                        name: source.clone(),
                    });
                }
            }
        }

        for tag in &self.tags {
            tag.validate(self)?;
        }
        for multi_tag in &self.multi_tags {
            multi_tag.validate(self)?;
        }

        Ok(())
    }
}

fn resolve_section<'a>(sections: &'a [Section], name: &str) -> Result<&'a Section, VaultError> {
    find_section(sections, name).ok_or_else(|| VaultError::MissingEntity {
        kind: "section",
        name: name.to_string(),
    })
}
